//! Standard builtin units for unitcast
//!
//! Every function here builds a fresh descriptor. Units with the same scale
//! and dimension compare equal, so building a unit twice is harmless.

pub mod units;

pub use unitcast_unit::Prefix;
