//! Units for unitcast
//!
//! This crate describes units as the conversion engine sees them: a
//! [`Dimension`], a [`Scale`] relative to the base unit of that dimension, and
//! for affine units a zero point over an absolute [`LinearUnit`].

pub mod dimension;
pub mod prefix;
pub mod scale;
pub mod unit;

pub use self::dimension::{BaseDimension, Dimension};
pub use self::prefix::Prefix;
pub use self::scale::Scale;
pub use self::unit::{AffineUnit, LinearUnit, Unit};
