//! MT19937-64 parameters (Nishimura & Matsumoto, 2004)

/// Number of 64-bit words in the state vector
pub const NN: usize = 312;

/// Offset of the word mixed into each twisted word
pub const MM: usize = 156;

/// Twist matrix constant
pub const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;

/// Most significant 33 bits
pub const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;

/// Least significant 31 bits
pub const LOWER_MASK: u64 = 0x7FFF_FFFF;

/// Seed used when a value is drawn before any explicit seeding
pub const DEFAULT_SEED: u64 = 5489;

/// Scalar seed that array seeding starts from
pub const ARRAY_SEED_BASE: u64 = 1965_0218;

/// Multiplier of the scalar seeding recurrence
pub const SCALAR_SEED_MULT: u64 = 6_364_136_223_846_793_005;

/// Multiplier of the keyed array seeding pass
pub const KEY_MIX_MULT: u64 = 3_935_559_000_370_003_845;

/// Multiplier of the final array seeding pass
pub const FINAL_MIX_MULT: u64 = 2_862_933_555_777_941_757;

// Tempering (u, d), (s, b), (t, c), l
pub const TEMPER_U: u32 = 29;
pub const TEMPER_D: u64 = 0x5555_5555_5555_5555;
pub const TEMPER_S: u32 = 17;
pub const TEMPER_B: u64 = 0x71D6_7FFF_EDA6_0000;
pub const TEMPER_T: u32 = 37;
pub const TEMPER_C: u64 = 0xFFF7_EEE0_0000_0000;
pub const TEMPER_L: u32 = 43;
