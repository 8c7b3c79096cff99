//! Conversion factors and quantity conversion for unitcast
//!
//! [`convfact`] computes the factor between two units, staying exact
//! whenever it can. [`uconvert`] applies it to a [`Quantity`], handling
//! affine units such as degrees Celsius. [`uconvert_number`] and
//! [`uconvert_value`] extend the same protocol to plain numbers and missing
//! values.

mod convert;
mod error;
mod factor;
mod precision;
mod quantity;

pub use self::convert::{uconvert, uconvert_number, uconvert_value};
pub use self::error::{ConversionError, DimensionError, DimensionOperand, NumericRangeError};
pub use self::factor::{ConversionFactor, convfact, convfact_for};
pub use self::precision::{FloatPrecision, float_precision_for};
pub use self::quantity::{Quantity, QuantityType, Value};
