//! Tempering and output mappings
//!
//! Every output starts as one tempered 64-bit word; the mappings below are
//! pure functions of that word.

use super::constants::{
    TEMPER_B, TEMPER_C, TEMPER_D, TEMPER_L, TEMPER_S, TEMPER_T, TEMPER_U,
};

/// 2^53 - 1
const REAL1_SCALE: f64 = 1.0 / 9_007_199_254_740_991.0;
/// 2^53
const REAL2_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;
/// 2^52
const REAL3_SCALE: f64 = 1.0 / 4_503_599_627_370_496.0;

/// Apply the MT19937-64 tempering transform to a raw state word.
#[inline]
pub fn temper(mut x: u64) -> u64 {
    x ^= (x >> TEMPER_U) & TEMPER_D;
    x ^= (x << TEMPER_S) & TEMPER_B;
    x ^= (x << TEMPER_T) & TEMPER_C;
    x ^= x >> TEMPER_L;
    x
}

/// Non-negative integer on [0, 2^63 - 1]
#[inline]
pub fn to_int63(x: u64) -> i64 {
    (x >> 1) as i64
}

/// Real on the closed interval [0, 1]
#[inline]
pub fn to_real1(x: u64) -> f64 {
    (x >> 11) as f64 * REAL1_SCALE
}

/// Real on the half-open interval [0, 1)
#[inline]
pub fn to_real2(x: u64) -> f64 {
    (x >> 11) as f64 * REAL2_SCALE
}

/// Real on the open interval (0, 1)
#[inline]
pub fn to_real3(x: u64) -> f64 {
    ((x >> 12) as f64 + 0.5) * REAL3_SCALE
}
