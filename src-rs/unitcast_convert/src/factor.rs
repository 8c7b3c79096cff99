//! The conversion-factor engine
//!
//! [`convfact`] combines the scales of two units into a single factor. The
//! factor stays exact (an integer or a rational) unless one of the units has
//! a floating coefficient, or folding the power of ten into the rational part
//! would overflow `i64`.

use std::fmt;

use num_rational::Rational64;
use num_traits::{CheckedMul, One, Zero};
use unitcast_shared::{
    float::is_approx,
    number::{Number, NumberError, NumberKind},
};
use unitcast_unit::Unit;

use crate::{
    error::{ConversionError, DimensionError, DimensionOperand, NumericRangeError},
    precision::float_precision_for,
};

/// The largest `i64`, as a float.
#[expect(
    clippy::cast_precision_loss,
    reason = "only used as a magnitude bound"
)]
const MAX_INTEGER: f64 = i64::MAX as f64;

/// A factor that converts a value from one unit to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionFactor {
    /// An exact integer factor
    Integer(i64),
    /// An exact rational factor whose denominator is not one
    Rational(Rational64),
    /// A single precision factor, only produced for single precision values
    Float32(f32),
    /// A double precision factor
    Float64(f64),
}

impl ConversionFactor {
    /// The identity factor.
    #[must_use]
    pub const fn one() -> Self {
        Self::Integer(1)
    }

    /// Creates an exact factor, demoting a rational with denominator one to
    /// an integer.
    #[must_use]
    pub fn exact(value: Rational64) -> Self {
        if value.is_integer() {
            Self::Integer(value.to_integer())
        } else {
            Self::Rational(value)
        }
    }

    /// Returns whether the factor is exact.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Rational(_))
    }

    /// Returns whether the factor is exactly one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(value) => *value == 1,
            Self::Rational(value) => value.is_one(),
            Self::Float32(value) => value.is_one(),
            Self::Float64(value) => value.is_one(),
        }
    }

    /// Returns the factor as a double precision float.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_number().to_f64()
    }

    /// Returns the factor as a number that can be multiplied with a value.
    #[must_use]
    pub const fn to_number(&self) -> Number {
        match *self {
            Self::Integer(value) => Number::Integer(value),
            Self::Rational(value) => Number::Rational(value),
            Self::Float32(value) => Number::Float32(value),
            Self::Float64(value) => Number::Float64(value),
        }
    }

    /// Returns the reciprocal of the factor.
    ///
    /// Factors are never zero, since every unit is a positive multiple of its
    /// base unit.
    #[must_use]
    pub fn recip(&self) -> Self {
        match self {
            Self::Integer(value) => Self::exact(Rational64::from_integer(*value).recip()),
            Self::Rational(value) => Self::exact(value.recip()),
            Self::Float32(value) => Self::Float32(value.recip()),
            Self::Float64(value) => Self::Float64(value.recip()),
        }
    }

    /// Multiplies two factors, promoting both to the wider kind.
    ///
    /// # Errors
    ///
    /// Returns `NumberError::Overflow` if an exact product does not fit.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, NumberError> {
        self.to_number()
            .checked_mul(&rhs.to_number())
            .map(Self::from_number)
    }

    fn from_number(number: Number) -> Self {
        match number {
            Number::Integer(value) => Self::Integer(value),
            Number::Rational(value) => Self::exact(value),
            Number::Float32(value) => Self::Float32(value),
            Number::Float64(value) => Self::Float64(value),
        }
    }
}

impl fmt::Display for ConversionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_number())
    }
}

/// Computes the factor that converts a value in `source` to a value in
/// `target`, so that `value_in_target = value_in_source * factor`.
///
/// Affine offsets are ignored; only the absolute units are compared. A unit
/// converted to itself always gives exactly `Integer(1)`.
///
/// # Errors
///
/// Returns `ConversionError::Dimension` if the units have different
/// dimensions.
///
/// Returns `ConversionError::NumericRange` if the factor can only be
/// represented as a float and that float overflows or underflows.
pub fn convfact(target: &Unit, source: &Unit) -> Result<ConversionFactor, ConversionError> {
    if target == source {
        return Ok(ConversionFactor::one());
    }

    if target.dimension() != source.dimension() {
        return Err(DimensionError::new(
            DimensionOperand::unit(target),
            DimensionOperand::unit(source),
        )
        .into());
    }

    let conv = *source.absolute_unit().scale() / *target.absolute_unit().scale();
    let (inexact, exact) = conv.basefactor();
    let (inexact, exact) = fold_tens(inexact, exact, conv.tensfactor());

    let exact = ConversionFactor::exact(exact);
    if is_approx(inexact, 1.0) {
        return Ok(exact);
    }

    let factor = inexact * exact.to_f64();
    check_float_range(factor, target, source)?;

    Ok(ConversionFactor::Float64(factor))
}

/// Computes the factor that converts a value of the given kind in `source`
/// to a value in `target`.
///
/// Exact factors are returned as they are. A floating factor is rounded to
/// the precision used for values of `kind` (see
/// [`float_precision_for`](crate::precision::float_precision_for)).
///
/// # Errors
///
/// Returns the same errors as [`convfact`]. Additionally returns
/// `ConversionError::NumericRange` if rounding the factor to single precision
/// overflows or underflows.
pub fn convfact_for(
    kind: NumberKind,
    target: &Unit,
    source: &Unit,
) -> Result<ConversionFactor, ConversionError> {
    let factor = convfact(target, source)?;

    let ConversionFactor::Float64(value) = factor else {
        return Ok(factor);
    };

    let factor = float_precision_for(kind).coerce(value);
    if let ConversionFactor::Float32(single) = factor {
        check_float_range(f64::from(single), target, source)?;
    }

    Ok(factor)
}

/// Folds a power of ten into the exact part of a scale, unless doing so
/// would overflow `i64`, in which case it is folded into the inexact part.
fn fold_tens(inexact: f64, exact: Rational64, tens: i32) -> (f64, Rational64) {
    let fpow = 10_f64.powi(tens);
    if fpow > MAX_INTEGER || fpow.recip() > MAX_INTEGER {
        return (inexact * fpow, exact);
    }

    match power_of_ten(tens).and_then(|power| exact.checked_mul(&power)) {
        Some(exact) => (inexact, exact),
        None => (inexact * fpow, exact),
    }
}

fn power_of_ten(tens: i32) -> Option<Rational64> {
    let power = 10_i64.checked_pow(tens.unsigned_abs())?;

    if tens < 0 {
        Some(Rational64::new(1, power))
    } else {
        Some(Rational64::from_integer(power))
    }
}

/// A floating factor between two units is never legitimately infinite,
/// `NaN`, or zero, so any of those means the float range was exceeded.
fn check_float_range(factor: f64, target: &Unit, source: &Unit) -> Result<(), NumericRangeError> {
    if factor.is_finite() && !factor.is_zero() {
        return Ok(());
    }

    Err(NumericRangeError::Factor {
        target: target.to_string(),
        source: source.to_string(),
        factor,
    })
}

#[cfg(test)]
mod tests {
    use unitcast_builtins::units;
    use unitcast_unit::{LinearUnit, Prefix, Scale};

    use super::*;

    fn unit(unit: impl Into<Unit>) -> Unit {
        unit.into()
    }

    #[test]
    fn identical_units_give_integer_one() {
        for u in [
            unit(units::meter()),
            unit(units::degree()),
            unit(units::electronvolt()),
            unit(units::celsius()),
            Unit::unitless(),
        ] {
            assert_eq!(convfact(&u, &u), Ok(ConversionFactor::Integer(1)));
        }
    }

    #[test]
    fn prefixes_fold_into_an_integer() {
        let factor = convfact(&unit(units::meter()), &unit(units::kilometer()));

        assert_eq!(factor, Ok(ConversionFactor::Integer(1000)));
    }

    #[test]
    fn negative_powers_fold_into_a_rational() {
        let factor = convfact(&unit(units::kilometer()), &unit(units::meter()));

        assert_eq!(
            factor,
            Ok(ConversionFactor::Rational(Rational64::new(1, 1000)))
        );
    }

    #[test]
    fn seconds_to_hours_is_exact() {
        let factor = convfact(&unit(units::hour()), &unit(units::second()));

        assert_eq!(
            factor,
            Ok(ConversionFactor::Rational(Rational64::new(1, 3600)))
        );
    }

    #[test]
    fn kilometers_to_inches_is_exact() {
        let factor = convfact(&unit(units::inch()), &unit(units::kilometer()));

        assert_eq!(
            factor,
            Ok(ConversionFactor::Rational(Rational64::new(5_000_000, 127)))
        );
    }

    #[test]
    fn derived_units_with_equal_scale_give_one() {
        let factor = convfact(&unit(units::joule()), &unit(units::newton_meter()));

        assert_eq!(factor, Ok(ConversionFactor::Integer(1)));
    }

    #[test]
    fn inexact_units_give_floats() {
        let factor =
            convfact(&unit(units::radian()), &unit(units::degree())).expect("same dimension");

        assert_eq!(factor, ConversionFactor::Float64(std::f64::consts::PI / 180.0));
        assert!(!factor.is_exact());
    }

    #[test]
    fn cancelling_inexact_parts_stay_exact() {
        let kilo_electronvolt = units::electronvolt().with_prefix(Prefix::Kilo);
        let factor = convfact(&unit(units::electronvolt()), &unit(kilo_electronvolt));

        assert_eq!(factor, Ok(ConversionFactor::Integer(1000)));
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let result = convfact(&unit(units::second()), &unit(units::meter()));

        let Err(ConversionError::Dimension(error)) = result else {
            panic!("expected a dimension error, got {result:?}");
        };
        assert_eq!(error.target().label(), "s");
        assert_eq!(error.source().label(), "m");
    }

    #[test]
    fn affine_offsets_are_ignored() {
        let factor = convfact(&unit(units::fahrenheit()), &unit(units::celsius()));

        assert_eq!(
            factor,
            Ok(ConversionFactor::Rational(Rational64::new(9, 5)))
        );
        assert_eq!(
            convfact(&unit(units::kelvin()), &unit(units::celsius())),
            Ok(ConversionFactor::Integer(1))
        );
    }

    #[test]
    fn large_powers_fold_into_the_float_coefficient() {
        let quetta = units::meter().with_prefix(Prefix::Quetta);
        let factor = convfact(&unit(units::meter()), &unit(quetta)).expect("representable");

        let ConversionFactor::Float64(value) = factor else {
            panic!("expected a float factor, got {factor:?}");
        };
        assert!(unitcast_shared::float::is_close(value / 1e30, 1.0));
    }

    #[test]
    fn exact_overflow_folds_into_the_float_coefficient() {
        let odd = units::meter().scaled("odd", Scale::exact(Rational64::new(1, 999_999_937)));
        let big = units::meter().with_prefix(Prefix::Exa);
        let factor = convfact(&unit(odd), &unit(big)).expect("representable");

        let ConversionFactor::Float64(value) = factor else {
            panic!("expected a float factor, got {factor:?}");
        };
        assert!(unitcast_shared::float::is_close(value / 999_999_937e18, 1.0));
    }

    #[test]
    fn non_finite_factors_are_range_errors() {
        let huge = LinearUnit::base("m", unitcast_unit::BaseDimension::Distance)
            .scaled("huge", Scale::new(1.0, Rational64::from_integer(1), 200));
        let tiny = LinearUnit::base("m", unitcast_unit::BaseDimension::Distance)
            .scaled("tiny", Scale::new(1.0, Rational64::from_integer(1), -200));

        let result = convfact(&unit(tiny.clone()), &unit(huge.clone()));
        assert!(matches!(
            result,
            Err(ConversionError::NumericRange(NumericRangeError::Factor { .. }))
        ));

        let result = convfact(&unit(huge), &unit(tiny));
        assert!(matches!(
            result,
            Err(ConversionError::NumericRange(NumericRangeError::Factor { .. }))
        ));
    }

    #[test]
    fn reciprocal_factors_multiply_to_one() {
        let pairs = [
            (unit(units::hour()), unit(units::second())),
            (unit(units::inch()), unit(units::kilometer())),
            (unit(units::liter()), unit(units::meter().powi(3))),
            (unit(units::radian()), unit(units::degree())),
            (unit(units::joule()), unit(units::electronvolt())),
        ];

        for (s, t) in pairs {
            let forward = convfact(&s, &t).expect("same dimension");
            let backward = convfact(&t, &s).expect("same dimension");
            let product = forward.checked_mul(&backward).expect("no overflow");

            if forward.is_exact() && backward.is_exact() {
                assert!(product.is_one(), "{s} and {t} gave {product}");
            } else {
                assert!(unitcast_shared::float::is_close(product.to_f64(), 1.0));
            }
        }
    }

    #[test]
    fn typed_factors_round_floats_for_single_precision() {
        let target = unit(units::radian());
        let source = unit(units::degree());

        let single = convfact_for(NumberKind::Float32, &target, &source);
        let double = convfact_for(NumberKind::Integer, &target, &source);

        #[expect(
            clippy::cast_possible_truncation,
            reason = "comparing against the rounded factor"
        )]
        let expected = (std::f64::consts::PI / 180.0) as f32;
        assert_eq!(single, Ok(ConversionFactor::Float32(expected)));
        assert_eq!(
            double,
            Ok(ConversionFactor::Float64(std::f64::consts::PI / 180.0))
        );
    }

    #[test]
    fn typed_factors_leave_exact_factors_alone() {
        let factor = convfact_for(
            NumberKind::Float32,
            &unit(units::hour()),
            &unit(units::second()),
        );

        assert_eq!(
            factor,
            Ok(ConversionFactor::Rational(Rational64::new(1, 3600)))
        );
    }

    #[test]
    fn single_precision_overflow_is_a_range_error() {
        let yotta = units::meter().with_prefix(Prefix::Yotta);
        let yocto = units::meter().with_prefix(Prefix::Yocto);

        let double = convfact_for(NumberKind::Float64, &unit(yocto.clone()), &unit(yotta.clone()));
        let single = convfact_for(NumberKind::Float32, &unit(yocto), &unit(yotta));

        assert!(double.is_ok());
        assert!(matches!(
            single,
            Err(ConversionError::NumericRange(NumericRangeError::Factor { .. }))
        ));
    }

    #[test]
    fn reciprocals() {
        assert_eq!(
            ConversionFactor::Integer(1000).recip(),
            ConversionFactor::Rational(Rational64::new(1, 1000))
        );
        assert_eq!(
            ConversionFactor::Rational(Rational64::new(1, 1000)).recip(),
            ConversionFactor::Integer(1000)
        );
        assert_eq!(ConversionFactor::Float64(4.0).recip(), ConversionFactor::Float64(0.25));
    }
}
