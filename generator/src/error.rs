//! Generator errors

use thiserror::Error;

/// Errors that can occur while seeding or restoring a generator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Array seeding needs at least one key word to cycle through.
    #[error("Invalid argument: seed key must contain at least one word")]
    EmptyKey,

    #[error("Snapshot holds {actual} state words, expected {expected}")]
    SnapshotLength { expected: usize, actual: usize },

    #[error("Snapshot cursor {cursor} exceeds state length {max}")]
    SnapshotCursor { cursor: usize, max: usize },
}
