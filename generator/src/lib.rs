//! MT19937-64 - 64-bit Mersenne Twister
//!
//! Deterministic, seedable pseudo-random number generator with a period of
//! 2^19937 - 1 and 311-dimensional equidistribution at 64-bit precision.
//!
//! # Architecture
//!
//! - **rng::state**: State vector, cursor tag, scalar and array seeding
//! - **rng::twist**: Block regeneration of the state vector
//! - **rng::temper**: Tempering transform and derived output mappings
//! - **rng::mt64**: The owned generator and its `rand_core` integration
//! - **rng::snapshot**: Checkpoint/replay of generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed (or key) → same output sequence, on every platform
//! 2. All word arithmetic wraps modulo 2^64
//! 3. Not cryptographically secure: outputs reveal the internal state
//!
//! # Example
//! ```
//! use mt19937_64::Mt19937_64;
//!
//! let mut rng = Mt19937_64::from_key(&[0x12345, 0x23456, 0x34567, 0x45678]).unwrap();
//! assert_eq!(rng.next_int64(), 7266447313870364031);
//! ```

pub mod error;
pub mod rng;

pub use error::GeneratorError;
pub use rng::{constants, GeneratorSnapshot, Mt19937_64};
