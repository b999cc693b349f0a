//! The MT19937-64 generator
//!
//! # Determinism
//!
//! Same seed → same sequence of outputs. Each instance owns its state, so
//! independent streams can coexist; sharing one across threads needs an
//! external lock around every draw.

use rand_core::{impls, RngCore, SeedableRng};

use super::constants::{DEFAULT_SEED, NN};
use super::state::{Cursor, StateVector};
use super::temper::{temper, to_int63, to_real1, to_real2, to_real3};
use super::twist::twist;
use crate::error::GeneratorError;

/// 64-bit Mersenne Twister
///
/// # Example
/// ```
/// use mt19937_64::Mt19937_64;
///
/// let mut rng = Mt19937_64::with_seed(12345);
/// let value = rng.next_int64();
/// let unit = rng.next_real2(); // [0, 1)
/// assert!(unit >= 0.0 && unit < 1.0);
/// # let _ = value;
/// ```
#[derive(Clone)]
pub struct Mt19937_64 {
    pub(super) state: StateVector,
    /// Regenerations since the last seeding
    pub(super) twists: u64,
}

impl Mt19937_64 {
    /// Create an unseeded generator.
    ///
    /// The first draw seeds it with `DEFAULT_SEED` (5489), matching the
    /// reference implementation's behaviour when no seed is given.
    pub fn new() -> Self {
        Self {
            state: StateVector::unseeded(),
            twists: 0,
        }
    }

    /// Create a generator seeded from a single 64-bit value
    ///
    /// # Example
    /// ```
    /// use mt19937_64::Mt19937_64;
    ///
    /// let mut a = Mt19937_64::with_seed(42);
    /// let mut b = Mt19937_64::with_seed(42);
    /// assert_eq!(a.next_int64(), b.next_int64());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    /// Create a generator seeded from a key of any non-zero length
    ///
    /// # Errors
    /// Returns [`GeneratorError::EmptyKey`] for an empty key.
    ///
    /// # Example
    /// ```
    /// use mt19937_64::{GeneratorError, Mt19937_64};
    ///
    /// assert!(Mt19937_64::from_key(&[1, 2, 3]).is_ok());
    /// assert_eq!(Mt19937_64::from_key(&[]).unwrap_err(), GeneratorError::EmptyKey);
    /// ```
    pub fn from_key(key: &[u64]) -> Result<Self, GeneratorError> {
        let mut rng = Self::new();
        rng.seed_from_array(key)?;
        Ok(rng)
    }

    /// Reinitialize the whole state from a single 64-bit value.
    pub fn seed(&mut self, seed: u64) {
        self.state.seed_scalar(seed);
        self.twists = 0;
    }

    /// Reinitialize the whole state from a key.
    ///
    /// This replaces any earlier seeding rather than accumulating with it.
    /// On error the generator is left exactly as it was.
    pub fn seed_from_array(&mut self, key: &[u64]) -> Result<(), GeneratorError> {
        self.state.seed_array(key)?;
        self.twists = 0;
        Ok(())
    }

    /// Whether any seeding (explicit, or the default on first draw) has run
    pub fn is_seeded(&self) -> bool {
        self.state.cursor != Cursor::Unseeded
    }

    /// Number of block regenerations since the last seeding
    pub fn twist_count(&self) -> u64 {
        self.twists
    }

    /// Next tempered 64-bit output on [0, 2^64 - 1]
    pub fn next_int64(&mut self) -> u64 {
        let index = match self.state.cursor {
            Cursor::At(i) if i < NN => i,
            Cursor::At(_) => self.regenerate(),
            Cursor::Unseeded => {
                self.state.seed_scalar(DEFAULT_SEED);
                self.regenerate()
            }
        };

        let raw = self.state.words[index];
        self.state.cursor = Cursor::At(index + 1);
        temper(raw)
    }

    /// Next non-negative integer on [0, 2^63 - 1]
    pub fn next_int63(&mut self) -> i64 {
        to_int63(self.next_int64())
    }

    /// Next real on [0, 1]
    pub fn next_real1(&mut self) -> f64 {
        to_real1(self.next_int64())
    }

    /// Next real on [0, 1)
    pub fn next_real2(&mut self) -> f64 {
        to_real2(self.next_int64())
    }

    /// Next real on (0, 1)
    pub fn next_real3(&mut self) -> f64 {
        to_real3(self.next_int64())
    }

    /// Twist the block and return the index to read from.
    fn regenerate(&mut self) -> usize {
        twist(&mut self.state.words);
        self.twists += 1;
        0
    }
}

impl Default for Mt19937_64 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Mt19937_64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937_64")
            .field("cursor", &self.state.cursor)
            .field("twists", &self.twists)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937_64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_int64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_int64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937_64 {
    /// Little-endian scalar seed
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unseeded_until_first_draw() {
        let mut rng = Mt19937_64::new();
        assert!(!rng.is_seeded());
        assert_eq!(rng.twist_count(), 0);

        rng.next_int64();
        assert!(rng.is_seeded());
        assert_eq!(rng.twist_count(), 1);
    }

    #[test]
    fn test_unseeded_matches_default_seed() {
        let mut lazy = Mt19937_64::new();
        let mut eager = Mt19937_64::with_seed(DEFAULT_SEED);

        for _ in 0..1000 {
            assert_eq!(lazy.next_int64(), eager.next_int64());
        }
    }

    #[test]
    fn test_seeding_does_not_twist() {
        let rng = Mt19937_64::with_seed(7);
        assert!(rng.is_seeded());
        assert_eq!(rng.twist_count(), 0);
        assert_eq!(rng.state.cursor, Cursor::At(NN));
    }

    #[test]
    fn test_reseed_resets_twist_count() {
        let mut rng = Mt19937_64::with_seed(7);
        for _ in 0..NN * 3 {
            rng.next_int64();
        }
        assert_eq!(rng.twist_count(), 3);

        rng.seed(7);
        assert_eq!(rng.twist_count(), 0);
    }

    #[test]
    fn test_failed_array_seed_keeps_stream() {
        let mut rng = Mt19937_64::with_seed(99);
        let mut reference = rng.clone();
        rng.next_int64();
        reference.next_int64();

        assert_eq!(rng.seed_from_array(&[]), Err(GeneratorError::EmptyKey));
        assert_eq!(rng.next_int64(), reference.next_int64());
    }

    #[test]
    fn test_derived_outputs_consume_one_draw() {
        let mut rng = Mt19937_64::with_seed(5);
        let mut raw = Mt19937_64::with_seed(5);

        assert_eq!(rng.next_int63(), to_int63(raw.next_int64()));
        assert_eq!(rng.next_real1(), to_real1(raw.next_int64()));
        assert_eq!(rng.next_real2(), to_real2(raw.next_int64()));
        assert_eq!(rng.next_real3(), to_real3(raw.next_int64()));
        assert_eq!(rng.next_int64(), raw.next_int64());
    }

    #[test]
    fn test_rng_core_next_u64_is_raw_output() {
        let mut rng = Mt19937_64::with_seed(11);
        let mut raw = Mt19937_64::with_seed(11);

        assert_eq!(rng.next_u64(), raw.next_int64());
        assert_eq!(rng.next_u32(), (raw.next_int64() >> 32) as u32);
    }

    #[test]
    fn test_fill_bytes_uses_little_endian_words() {
        let mut rng = Mt19937_64::with_seed(11);
        let mut raw = Mt19937_64::with_seed(11);

        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);

        assert_eq!(&bytes[..8], &raw.next_int64().to_le_bytes());
        assert_eq!(&bytes[8..], &raw.next_int64().to_le_bytes());
    }

    #[test]
    fn test_seedable_rng_routes_to_scalar_seed() {
        let mut from_u64 = Mt19937_64::seed_from_u64(0x0102_0304_0506_0708);
        let mut from_bytes =
            Mt19937_64::from_seed([0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        let mut direct = Mt19937_64::with_seed(0x0102_0304_0506_0708);

        let expected = direct.next_int64();
        assert_eq!(from_u64.next_int64(), expected);
        assert_eq!(from_bytes.next_int64(), expected);
    }

    #[test]
    fn test_debug_omits_state_words() {
        let rng = Mt19937_64::with_seed(1);
        let text = format!("{:?}", rng);
        assert!(text.starts_with("Mt19937_64"));
        assert!(text.len() < 100, "Debug output too long: {}", text);
    }
}
