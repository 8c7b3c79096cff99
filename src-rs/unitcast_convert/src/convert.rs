//! Converting quantities, numbers, and values between units

use unitcast_shared::number::Number;
use unitcast_unit::Unit;

use crate::{
    error::{ConversionError, DimensionError, DimensionOperand},
    factor::{convfact, convfact_for},
    quantity::{Quantity, Value},
};

/// Converts a quantity to the unit `target`.
///
/// Converting to the quantity's own unit returns the value untouched.
/// Otherwise the value is multiplied by the conversion factor for its
/// numeric kind, so integers become rationals when the factor is a rational,
/// and single precision values stay single precision.
///
/// If either unit is affine, the value is first shifted to the absolute zero
/// of the source unit, scaled, and then shifted to the zero of the target.
///
/// # Errors
///
/// Returns `ConversionError::Dimension` if the units have different
/// dimensions.
///
/// Returns `ConversionError::NumericRange` if the factor overflows or
/// underflows, or if an exact value overflows when the factor is applied.
pub fn uconvert(target: &Unit, quantity: &Quantity) -> Result<Quantity, ConversionError> {
    let source = quantity.unit();

    if source == target {
        return Ok(Quantity::new(*quantity.value(), target.clone()));
    }

    if source.is_affine() || target.is_affine() {
        return uconvert_affine(target, quantity);
    }

    let value = quantity.value();
    let factor = convfact_for(value.kind(), target, source)?;
    let value = value.checked_mul(&factor.to_number())?;

    Ok(Quantity::new(value, target.clone()))
}

/// Converts a quantity when at least one of the units is affine.
///
/// A linear unit has a zero point of zero.
fn uconvert_affine(target: &Unit, quantity: &Quantity) -> Result<Quantity, ConversionError> {
    let source = quantity.unit();

    if !source.dimensionally_eq(target) {
        return Err(DimensionError::new(
            DimensionOperand::unit(target),
            DimensionOperand::quantity(quantity),
        )
        .into());
    }

    let value = quantity.value();
    let zero = Number::zero(value.kind());
    let source_zero = source.zero_point().unwrap_or(&zero);
    let target_zero = target.zero_point().unwrap_or(&zero);

    let factor = convfact(target, source)?;
    let value = value
        .checked_sub(source_zero)?
        .checked_mul(&factor.to_number())?
        .checked_add(target_zero)?;

    Ok(Quantity::new(value, target.clone()))
}

/// Converts a plain number to a quantity with the unit `target`.
///
/// The number is treated as a value of the unitless unit, so the target must
/// be dimensionless. Scaled dimensionless units apply their scale, so `1/2`
/// converted to percent is `50 %`.
///
/// # Errors
///
/// Returns `ConversionError::Dimension` if `target` is not dimensionless.
///
/// Returns `ConversionError::NumericRange` if the conversion leaves the
/// numeric range.
pub fn uconvert_number(target: &Unit, number: &Number) -> Result<Quantity, ConversionError> {
    if !target.is_unitless() {
        return Err(DimensionError::new(
            DimensionOperand::unit(target),
            DimensionOperand::number(number),
        )
        .into());
    }

    let factor = convfact_for(number.kind(), target, &Unit::unitless())?;
    let value = number.checked_mul(&factor.to_number())?;

    Ok(Quantity::new(value, target.clone()))
}

/// Converts a value to the unit `target`.
///
/// Quantities and numbers are converted with [`uconvert`] and
/// [`uconvert_number`]. A missing value converts to a missing value.
///
/// # Errors
///
/// Returns the errors of [`uconvert`] and [`uconvert_number`].
pub fn uconvert_value(target: &Unit, value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::Quantity(quantity) => uconvert(target, quantity).map(Value::Quantity),
        Value::Number(number) => uconvert_number(target, number).map(Value::Quantity),
        Value::Missing => Ok(Value::Missing),
    }
}
