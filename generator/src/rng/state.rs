//! State vector and seeding
//!
//! Both seeding procedures overwrite every word and leave the cursor at
//! `NN`, so the first draw after seeding always regenerates the block.

use super::constants::{
    ARRAY_SEED_BASE, FINAL_MIX_MULT, KEY_MIX_MULT, NN, SCALAR_SEED_MULT,
};
use crate::error::GeneratorError;

/// Read position in the state vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    /// No seeding has happened; the first draw seeds with `DEFAULT_SEED`.
    Unseeded,
    /// Index of the next word to temper, `0..=NN`. `NN` means exhausted.
    At(usize),
}

/// Index `offset` words past `i`, wrapping around the state vector
#[inline]
pub(crate) const fn ring(i: usize, offset: usize) -> usize {
    (i + offset) % NN
}

#[derive(Debug, Clone)]
pub(crate) struct StateVector {
    pub(crate) words: [u64; NN],
    pub(crate) cursor: Cursor,
}

impl StateVector {
    pub(crate) fn unseeded() -> Self {
        Self {
            words: [0; NN],
            cursor: Cursor::Unseeded,
        }
    }

    /// Fill the state from a single 64-bit seed.
    ///
    /// `words[0]` is the seed itself; the rest follow Knuth's linear
    /// congruential recurrence on the previous word.
    pub(crate) fn seed_scalar(&mut self, seed: u64) {
        self.words[0] = seed;
        for i in 1..NN {
            let prev = self.words[i - 1];
            self.words[i] = SCALAR_SEED_MULT
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.cursor = Cursor::At(NN);
    }

    /// Fill the state from a key of arbitrary length.
    ///
    /// Starts from `seed_scalar(ARRAY_SEED_BASE)`, folds every key word in
    /// at least once, then runs a second keyless pass over the vector.
    /// The state is left untouched when `key` is empty.
    pub(crate) fn seed_array(&mut self, key: &[u64]) -> Result<(), GeneratorError> {
        if key.is_empty() {
            return Err(GeneratorError::EmptyKey);
        }

        self.seed_scalar(ARRAY_SEED_BASE);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..NN.max(key.len()) {
            let prev = self.words[i - 1];
            self.words[i] = (self.words[i] ^ (prev ^ (prev >> 62)).wrapping_mul(KEY_MIX_MULT))
                .wrapping_add(key[j])
                .wrapping_add(j as u64);
            i = self.step_seed_index(i);
            j = (j + 1) % key.len();
        }

        for _ in 0..NN - 1 {
            let prev = self.words[i - 1];
            self.words[i] = (self.words[i] ^ (prev ^ (prev >> 62)).wrapping_mul(FINAL_MIX_MULT))
                .wrapping_sub(i as u64);
            i = self.step_seed_index(i);
        }

        // MSB set: the initial array can never be all zeros
        self.words[0] = 1 << 63;
        Ok(())
    }

    /// Seeding walks `1..NN`; on wrap the last word is carried into slot 0
    /// so the next step still has a predecessor to mix with.
    fn step_seed_index(&mut self, i: usize) -> usize {
        let next = i + 1;
        if next >= NN {
            self.words[0] = self.words[NN - 1];
            1
        } else {
            next
        }
    }
}
