//! Floating point precision of converted values

use unitcast_shared::number::NumberKind;

use crate::factor::ConversionFactor;

/// The precision a floating conversion factor is rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatPrecision {
    /// Single precision, `f32`
    Single,
    /// Double precision, `f64`
    Double,
}

impl FloatPrecision {
    /// Rounds a double precision factor to this precision.
    #[must_use]
    pub fn coerce(self, value: f64) -> ConversionFactor {
        match self {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "rounding to single precision is the point"
            )]
            Self::Single => ConversionFactor::Float32(value as f32),
            Self::Double => ConversionFactor::Float64(value),
        }
    }

    /// Returns the number kind of this precision.
    #[must_use]
    pub const fn kind(self) -> NumberKind {
        match self {
            Self::Single => NumberKind::Float32,
            Self::Double => NumberKind::Float64,
        }
    }
}

/// Returns the precision of floating factors applied to values of `kind`.
///
/// Single precision values keep single precision factors. Every other kind
/// uses double precision, including the exact kinds, which have no floating
/// representation of their own.
#[must_use]
pub const fn float_precision_for(kind: NumberKind) -> FloatPrecision {
    match kind {
        NumberKind::Float32 => FloatPrecision::Single,
        NumberKind::Integer | NumberKind::Rational | NumberKind::Float64 => FloatPrecision::Double,
    }
}
