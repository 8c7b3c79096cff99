//! Exact unit conversion
//!
//! `unitcast` computes conversion factors between physical units and applies
//! them to quantities. Factors stay exact (integers or rationals) whenever
//! the units allow it, and fall back to floating point only when a unit has
//! a floating coefficient or a power of ten too large to fold into an `i64`.
//!
//! ```
//! use unitcast::{Number, Quantity, builtins::units, uconvert};
//!
//! let quantity = Quantity::new(Number::Integer(3602), units::second());
//! let hours = uconvert(&units::hour().into(), &quantity).expect("same dimension");
//!
//! assert_eq!(hours.value(), &Number::rational(1801, 1800));
//! ```
//!
//! The layers are split into crates, re-exported here:
//!
//! - [`unit`] describes units: dimensions, scales, prefixes, linear and
//!   affine units
//! - [`builtins`] is a catalog of standard units (feature `builtins`)
//! - the conversion engine is re-exported at the root (feature `convert`)

pub use unitcast_shared::{
    error::{AsUnitcastError, Context},
    number::{Number, NumberError, NumberKind},
};

pub use unitcast_unit as unit;

#[cfg(feature = "builtins")]
pub use unitcast_builtins as builtins;

#[cfg(feature = "convert")]
pub use unitcast_convert::*;
