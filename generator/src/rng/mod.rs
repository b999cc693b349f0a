//! MT19937-64 random number generation
//!
//! The generator is split along the three stages of the algorithm: seeding
//! fills the state vector, the twist regenerates it one block at a time, and
//! tempering turns each raw state word into an output.

pub mod constants;
mod mt64;
mod snapshot;
mod state;
mod temper;
mod twist;

pub use mt64::Mt19937_64;
pub use snapshot::GeneratorSnapshot;
pub use temper::{temper, to_int63, to_real1, to_real2, to_real3};
