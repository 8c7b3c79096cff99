//! Numeric values stored in quantities
//!
//! A [`Number`] is a tagged union over the numeric types a quantity can hold.
//! Its [`NumberKind`] plays the role of the value's numeric type: arithmetic
//! between two numbers promotes both to the wider kind, following the order
//! `Integer < Rational < Float32 < Float64`.

use std::fmt;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Float, Zero};

use crate::error::{AsUnitcastError, Context};

/// The numeric type of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberKind {
    /// A 64-bit signed integer
    Integer,
    /// An exact rational with 64-bit numerator and denominator
    Rational,
    /// A single precision float
    Float32,
    /// A double precision float
    Float64,
}

impl NumberKind {
    /// Returns whether numbers of this kind are exact.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Integer | Self::Rational)
    }

    /// Returns the kind that both `self` and `other` can be widened to.
    #[must_use]
    pub fn promote(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Rational => write!(f, "rational"),
            Self::Float32 => write!(f, "float32"),
            Self::Float64 => write!(f, "float64"),
        }
    }
}

/// A numeric value.
///
/// Equality is structural: `Integer(1)` and `Rational(1)` are different
/// numbers because they have different kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer
    Integer(i64),
    /// An exact rational
    Rational(Rational64),
    /// A single precision float
    Float32(f32),
    /// A double precision float
    Float64(f64),
}

impl Number {
    /// Creates a rational number from a numerator and denominator.
    ///
    /// The rational is reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        Self::Rational(Rational64::new(numerator, denominator))
    }

    /// Returns the zero value of the given kind.
    #[must_use]
    pub fn zero(kind: NumberKind) -> Self {
        match kind {
            NumberKind::Integer => Self::Integer(0),
            NumberKind::Rational => Self::Rational(Rational64::zero()),
            NumberKind::Float32 => Self::Float32(0.0),
            NumberKind::Float64 => Self::Float64(0.0),
        }
    }

    /// Returns the kind of the number.
    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        match self {
            Self::Integer(_) => NumberKind::Integer,
            Self::Rational(_) => NumberKind::Rational,
            Self::Float32(_) => NumberKind::Float32,
            Self::Float64(_) => NumberKind::Float64,
        }
    }

    /// Returns whether the number is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(value) => *value == 0,
            Self::Rational(value) => value.is_zero(),
            Self::Float32(value) => value.is_zero(),
            Self::Float64(value) => value.is_zero(),
        }
    }

    /// Returns the number as a double precision float.
    ///
    /// This may lose precision for large integers and rationals.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            #[expect(
                clippy::cast_precision_loss,
                reason = "the caller asked for an approximation"
            )]
            Self::Integer(value) => *value as f64,
            Self::Rational(value) => rational_to_f64(value),
            Self::Float32(value) => f64::from(*value),
            Self::Float64(value) => *value,
        }
    }

    /// Converts the number to the given kind.
    ///
    /// Widening conversions always succeed. Narrowing conversions succeed only
    /// if the value is represented exactly in the target kind, except for
    /// `Float64` to `Float32`, which rounds to the nearest single precision
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `NumberError::Inexact` if the value cannot be represented
    /// exactly in an exact target kind.
    #[expect(
        clippy::panic_in_result_fn,
        reason = "widening conversions are handled before the match"
    )]
    pub fn convert_to(self, kind: NumberKind) -> Result<Self, NumberError> {
        if self.kind() <= kind {
            return Ok(self.widen_to(kind));
        }

        let inexact = || NumberError::Inexact {
            value: self,
            target: kind,
        };

        match (self, kind) {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "rounding to single precision is the requested conversion"
            )]
            (Self::Float64(value), NumberKind::Float32) => Ok(Self::Float32(value as f32)),
            (Self::Float32(value), NumberKind::Rational) => float_to_rational(f64::from(value))
                .map(Self::Rational)
                .ok_or_else(inexact),
            (Self::Float64(value), NumberKind::Rational) => float_to_rational(value)
                .map(Self::Rational)
                .ok_or_else(inexact),
            (Self::Float32(value), NumberKind::Integer) => float_to_rational(f64::from(value))
                .and_then(rational_to_integer)
                .map(Self::Integer)
                .ok_or_else(inexact),
            (Self::Float64(value), NumberKind::Integer) => float_to_rational(value)
                .and_then(rational_to_integer)
                .map(Self::Integer)
                .ok_or_else(inexact),
            (Self::Rational(value), NumberKind::Integer) => rational_to_integer(value)
                .map(Self::Integer)
                .ok_or_else(inexact),
            _ => unreachable!("only narrowing conversions remain"),
        }
    }

    /// Adds two numbers, promoting both to the wider kind.
    ///
    /// # Errors
    ///
    /// Returns `NumberError::Overflow` if an exact result does not fit.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, NumberError> {
        self.binary_op(
            rhs,
            i64::checked_add,
            |lhs, rhs| lhs.checked_add(rhs),
            |lhs, rhs| lhs + rhs,
            |lhs, rhs| lhs + rhs,
        )
    }

    /// Subtracts `rhs` from `self`, promoting both to the wider kind.
    ///
    /// # Errors
    ///
    /// Returns `NumberError::Overflow` if an exact result does not fit.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, NumberError> {
        self.binary_op(
            rhs,
            i64::checked_sub,
            |lhs, rhs| lhs.checked_sub(rhs),
            |lhs, rhs| lhs - rhs,
            |lhs, rhs| lhs - rhs,
        )
    }

    /// Multiplies two numbers, promoting both to the wider kind.
    ///
    /// # Errors
    ///
    /// Returns `NumberError::Overflow` if an exact result does not fit.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, NumberError> {
        self.binary_op(
            rhs,
            i64::checked_mul,
            |lhs, rhs| lhs.checked_mul(rhs),
            |lhs, rhs| lhs * rhs,
            |lhs, rhs| lhs * rhs,
        )
    }

    #[expect(
        clippy::panic_in_result_fn,
        reason = "both operands are widened to the same kind before matching"
    )]
    fn binary_op(
        &self,
        rhs: &Self,
        integer_op: impl FnOnce(i64, i64) -> Option<i64>,
        rational_op: impl FnOnce(&Rational64, &Rational64) -> Option<Rational64>,
        float32_op: impl FnOnce(f32, f32) -> f32,
        float64_op: impl FnOnce(f64, f64) -> f64,
    ) -> Result<Self, NumberError> {
        let kind = self.kind().promote(rhs.kind());

        match (self.widen_to(kind), rhs.widen_to(kind)) {
            (Self::Integer(lhs), Self::Integer(rhs)) => integer_op(lhs, rhs)
                .map(Self::Integer)
                .ok_or(NumberError::Overflow { kind }),
            (Self::Rational(lhs), Self::Rational(rhs)) => rational_op(&lhs, &rhs)
                .map(Self::Rational)
                .ok_or(NumberError::Overflow { kind }),
            (Self::Float32(lhs), Self::Float32(rhs)) => Ok(Self::Float32(float32_op(lhs, rhs))),
            (Self::Float64(lhs), Self::Float64(rhs)) => Ok(Self::Float64(float64_op(lhs, rhs))),
            _ => unreachable!("both operands were widened to the same kind"),
        }
    }

    /// Widens the number to `kind`, which must not be narrower than the
    /// number's own kind.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "widening to a float kind rounds, like any float promotion"
    )]
    fn widen_to(self, kind: NumberKind) -> Self {
        debug_assert!(self.kind() <= kind, "cannot widen {self} to {kind}");

        match (self, kind) {
            (Self::Integer(value), NumberKind::Rational) => {
                Self::Rational(Rational64::from_integer(value))
            }
            (Self::Integer(value), NumberKind::Float32) => Self::Float32(value as f32),
            (Self::Integer(value), NumberKind::Float64) => Self::Float64(value as f64),
            (Self::Rational(value), NumberKind::Float32) => {
                Self::Float32(rational_to_f64(&value) as f32)
            }
            (Self::Rational(value), NumberKind::Float64) => {
                Self::Float64(rational_to_f64(&value))
            }
            (Self::Float32(value), NumberKind::Float64) => Self::Float64(f64::from(value)),
            _ => self,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Rational64> for Number {
    fn from(value: Rational64) -> Self {
        Self::Rational(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Rational(value) if value.is_integer() => write!(f, "{}", value.numer()),
            Self::Rational(value) => write!(f, "{}/{}", value.numer(), value.denom()),
            Self::Float32(value) => write!(f, "{value}"),
            Self::Float64(value) => write!(f, "{value}"),
        }
    }
}

/// Converts a rational to the nearest double, dividing the rounded numerator
/// by the rounded denominator.
#[must_use]
pub fn rational_to_f64(value: &Rational64) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "numerators and denominators beyond 2^53 are rounded"
    )]
    let (numer, denom) = (*value.numer() as f64, *value.denom() as f64);
    numer / denom
}

/// Converts a float to the rational it represents exactly.
///
/// Returns `None` for non-finite floats and for floats whose exact value
/// needs a numerator or denominator outside of `i64`.
#[must_use]
pub fn float_to_rational(value: f64) -> Option<Rational64> {
    if !value.is_finite() {
        return None;
    }

    let (mantissa, exponent, sign) = Float::integer_decode(value);
    if mantissa == 0 {
        return Some(Rational64::zero());
    }

    let mantissa = i64::try_from(mantissa).ok()? * i64::from(sign);
    let exponent = i32::from(exponent);

    if exponent >= 0 {
        if exponent >= 63 {
            return None;
        }
        return mantissa
            .checked_mul(1_i64 << exponent)
            .map(Rational64::from_integer);
    }

    // the mantissa has at most 53 significant bits, so strip trailing zeros
    // to keep the denominator small
    let shift = mantissa.trailing_zeros().min(exponent.unsigned_abs());
    let mantissa = mantissa >> shift;
    let denominator_exponent = exponent.unsigned_abs() - shift;
    if denominator_exponent >= 63 {
        return None;
    }

    Some(Rational64::new(mantissa, 1_i64 << denominator_exponent))
}

fn rational_to_integer(value: Rational64) -> Option<i64> {
    value.is_integer().then(|| value.to_integer())
}

/// An error from numeric arithmetic or conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberError {
    /// An exact result did not fit in the kind it was computed in
    Overflow {
        /// The kind the computation was carried out in
        kind: NumberKind,
    },
    /// A value could not be represented exactly in the target kind
    Inexact {
        /// The value that was being converted
        value: Number,
        /// The kind it was being converted to
        target: NumberKind,
    },
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for NumberError {}

impl AsUnitcastError for NumberError {
    fn message(&self) -> String {
        match self {
            Self::Overflow { kind } => format!("{kind} overflow"),
            Self::Inexact { value, target } => {
                format!("{value} cannot be represented exactly as {target}")
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Overflow { kind } if kind.is_exact() => vec![Context::Help(
                "convert the value to a floating point kind before converting units".to_string(),
            )],
            Self::Overflow { .. } | Self::Inexact { .. } => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_promote_to_the_wider_kind() {
        assert_eq!(
            NumberKind::Integer.promote(NumberKind::Rational),
            NumberKind::Rational
        );
        assert_eq!(
            NumberKind::Float32.promote(NumberKind::Rational),
            NumberKind::Float32
        );
        assert_eq!(
            NumberKind::Float32.promote(NumberKind::Float64),
            NumberKind::Float64
        );
    }

    #[test]
    fn integer_times_rational_is_rational() {
        let product = Number::Integer(3602)
            .checked_mul(&Number::rational(1, 3600))
            .expect("no overflow");

        assert_eq!(product, Number::rational(1801, 1800));
    }

    #[test]
    fn integer_rational_sum_stays_rational_even_when_integral() {
        let sum = Number::Integer(1)
            .checked_add(&Number::rational(1, 1))
            .expect("no overflow");

        assert_eq!(sum, Number::Rational(Rational64::from_integer(2)));
    }

    #[test]
    fn float32_absorbs_exact_kinds() {
        let product = Number::Float32(1.5)
            .checked_mul(&Number::rational(1, 2))
            .expect("floats never overflow");

        assert_eq!(product, Number::Float32(0.75));
    }

    #[test]
    fn integer_overflow_is_reported() {
        let result = Number::Integer(i64::MAX).checked_add(&Number::Integer(1));

        assert_eq!(
            result,
            Err(NumberError::Overflow {
                kind: NumberKind::Integer
            })
        );
    }

    #[test]
    fn rational_overflow_is_reported() {
        let big = Number::rational(i64::MAX, 3);
        let result = big.checked_mul(&Number::rational(11, 13));

        assert_eq!(
            result,
            Err(NumberError::Overflow {
                kind: NumberKind::Rational
            })
        );
    }

    #[test]
    fn subtraction_with_negative_rational() {
        let difference = Number::Integer(0)
            .checked_sub(&Number::rational(-27315, 100))
            .expect("no overflow");

        assert_eq!(difference, Number::rational(5463, 20));
    }

    #[test]
    fn float_to_rational_is_exact() {
        assert_eq!(float_to_rational(0.5), Some(Rational64::new(1, 2)));
        assert_eq!(float_to_rational(-3.0), Some(Rational64::from_integer(-3)));
        assert_eq!(float_to_rational(0.0), Some(Rational64::zero()));
        assert_eq!(
            float_to_rational(0.1),
            Some(Rational64::new(3_602_879_701_896_397, 36_028_797_018_963_968))
        );
        assert_eq!(float_to_rational(1e300), None);
        assert_eq!(float_to_rational(f64::NAN), None);
        assert_eq!(float_to_rational(f64::MIN_POSITIVE), None);
    }

    #[test]
    fn narrowing_requires_exactness() {
        assert_eq!(
            Number::Float64(4.0).convert_to(NumberKind::Integer),
            Ok(Number::Integer(4))
        );
        assert_eq!(
            Number::Float64(2.5).convert_to(NumberKind::Integer),
            Err(NumberError::Inexact {
                value: Number::Float64(2.5),
                target: NumberKind::Integer
            })
        );
        assert_eq!(
            Number::rational(3, 2).convert_to(NumberKind::Integer),
            Err(NumberError::Inexact {
                value: Number::rational(3, 2),
                target: NumberKind::Integer
            })
        );
        assert_eq!(
            Number::Float32(0.25).convert_to(NumberKind::Rational),
            Ok(Number::rational(1, 4))
        );
    }

    #[test]
    fn widening_and_rounding_always_succeed() {
        assert_eq!(
            Number::rational(1, 4).convert_to(NumberKind::Float64),
            Ok(Number::Float64(0.25))
        );
        assert_eq!(
            Number::Integer(3).convert_to(NumberKind::Float32),
            Ok(Number::Float32(3.0))
        );
        assert_eq!(
            Number::Float64(0.1).convert_to(NumberKind::Float32),
            Ok(Number::Float32(0.1))
        );
    }

    #[test]
    fn zero_has_requested_kind() {
        for kind in [
            NumberKind::Integer,
            NumberKind::Rational,
            NumberKind::Float32,
            NumberKind::Float64,
        ] {
            let zero = Number::zero(kind);
            assert_eq!(zero.kind(), kind);
            assert!(zero.is_zero());
        }
    }

    #[test]
    fn error_messages() {
        let error = NumberError::Inexact {
            value: Number::rational(3, 2),
            target: NumberKind::Integer,
        };

        assert_eq!(error.message(), "3/2 cannot be represented exactly as integer");
        assert_eq!(Number::rational(50, 1).to_string(), "50");
        assert_eq!(
            NumberError::Overflow {
                kind: NumberKind::Rational
            }
            .context()
            .len(),
            1
        );
    }
}
