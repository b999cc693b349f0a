//! Block regeneration ("twist")

use super::constants::{LOWER_MASK, MATRIX_A, MM, NN, UPPER_MASK};
use super::state::ring;

/// Regenerate all `NN` words in place.
///
/// Word `i` takes the upper 33 bits of itself and the lower 31 bits of its
/// successor, shifts the pair right once, folds in `MATRIX_A` when the
/// dropped bit was set, and XORs with the word `MM` places ahead. Indices
/// wrap, so words past `NN - MM` read already-regenerated values.
pub(crate) fn twist(words: &mut [u64; NN]) {
    for i in 0..NN {
        let x = (words[i] & UPPER_MASK) | (words[ring(i, 1)] & LOWER_MASK);
        let mag = if x & 1 == 1 { MATRIX_A } else { 0 };
        words[i] = words[ring(i, MM)] ^ (x >> 1) ^ mag;
    }
}
