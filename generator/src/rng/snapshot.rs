//! Checkpoint and replay
//!
//! A snapshot captures the full generator state so a stream can be resumed
//! later, in this process or another. Serialization format is left to the
//! caller.

use serde::{Deserialize, Serialize};

use super::constants::NN;
use super::mt64::Mt19937_64;
use super::state::{Cursor, StateVector};
use crate::error::GeneratorError;

/// Complete, restorable generator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// State vector, exactly `NN` words
    pub words: Vec<u64>,
    /// Next word to temper; `None` if never seeded
    pub cursor: Option<usize>,
    /// Regenerations since the last seeding
    pub twists: u64,
}

impl Mt19937_64 {
    /// Capture the current state
    ///
    /// # Example
    /// ```
    /// use mt19937_64::Mt19937_64;
    ///
    /// let mut rng = Mt19937_64::with_seed(12345);
    /// rng.next_int64();
    /// let snapshot = rng.snapshot();
    ///
    /// let mut resumed = Mt19937_64::restore(snapshot).unwrap();
    /// assert_eq!(rng.next_int64(), resumed.next_int64());
    /// ```
    pub fn snapshot(&self) -> GeneratorSnapshot {
        let cursor = match self.state.cursor {
            Cursor::Unseeded => None,
            Cursor::At(i) => Some(i),
        };
        GeneratorSnapshot {
            words: self.state.words.to_vec(),
            cursor,
            twists: self.twists,
        }
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// - [`GeneratorError::SnapshotLength`] if `words` is not `NN` long
    /// - [`GeneratorError::SnapshotCursor`] if `cursor` is past `NN`
    pub fn restore(snapshot: GeneratorSnapshot) -> Result<Self, GeneratorError> {
        let cursor = match snapshot.cursor {
            None => Cursor::Unseeded,
            Some(i) if i <= NN => Cursor::At(i),
            Some(i) => {
                return Err(GeneratorError::SnapshotCursor { cursor: i, max: NN });
            }
        };

        let words: [u64; NN] =
            snapshot
                .words
                .try_into()
                .map_err(|words: Vec<u64>| GeneratorError::SnapshotLength {
                    expected: NN,
                    actual: words.len(),
                })?;

        Ok(Self {
            state: StateVector { words, cursor },
            twists: snapshot.twists,
        })
    }
}
