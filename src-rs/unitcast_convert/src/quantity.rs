//! Quantities, quantity types, and possibly missing values

use std::fmt;

use unitcast_shared::number::{Number, NumberKind};
use unitcast_unit::Unit;

use crate::{
    convert::{uconvert, uconvert_number, uconvert_value},
    error::{ConversionError, DimensionError, DimensionOperand},
};

/// A number paired with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: Number,
    unit: Unit,
}

impl Quantity {
    /// Creates a new quantity.
    #[must_use]
    pub fn new(value: impl Into<Number>, unit: impl Into<Unit>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }

    /// Returns the numeric value of the quantity.
    #[must_use]
    pub const fn value(&self) -> &Number {
        &self.value
    }

    /// Returns the unit of the quantity.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Splits the quantity into its value and unit.
    #[must_use]
    pub fn into_parts(self) -> (Number, Unit) {
        (self.value, self.unit)
    }

    /// Converts the quantity to `target`, keeping the numeric kind of the
    /// value where the conversion factor allows it.
    ///
    /// See [`uconvert`] for details.
    ///
    /// # Errors
    ///
    /// Returns an error if the units have different dimensions or the
    /// conversion leaves the numeric range.
    pub fn uconvert(&self, target: &Unit) -> Result<Self, ConversionError> {
        uconvert(target, self)
    }

    /// Converts the quantity to the unit of `target`, then converts the value
    /// to the numeric kind of `target`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Dimension` if the quantity does not have
    /// the dimension of the target unit.
    ///
    /// Returns `ConversionError::Inexact` if the converted value cannot be
    /// represented exactly in an exact target kind.
    ///
    /// Returns `ConversionError::NumericRange` if the conversion leaves the
    /// numeric range.
    pub fn convert_to(&self, target: &QuantityType) -> Result<Self, ConversionError> {
        if !self.unit.dimensionally_eq(&target.unit) {
            return Err(DimensionError::new(
                DimensionOperand::unit(&target.unit),
                DimensionOperand::quantity(self),
            )
            .into());
        }

        let (value, unit) = uconvert(&target.unit, self)?.into_parts();
        let value = value.convert_to(target.kind)?;

        Ok(Self { value, unit })
    }

    /// Converts a dimensionless quantity to a plain number of the given
    /// kind.
    ///
    /// Scaled dimensionless units are resolved first, so `50 %` becomes
    /// `1/2`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Dimension` if the quantity is not
    /// dimensionless.
    ///
    /// Returns `ConversionError::Inexact` if the value cannot be represented
    /// exactly in an exact kind.
    pub fn into_number(self, kind: NumberKind) -> Result<Number, ConversionError> {
        let unitless = Unit::unitless();

        if !self.unit.is_unitless() {
            return Err(DimensionError::new(
                DimensionOperand::unit(&unitless),
                DimensionOperand::quantity(&self),
            )
            .into());
        }

        let (value, _) = uconvert(&unitless, &self)?.into_parts();
        Ok(value.convert_to(kind)?)
    }
}

impl TryFrom<&Quantity> for Number {
    type Error = ConversionError;

    fn try_from(quantity: &Quantity) -> Result<Self, Self::Error> {
        quantity.clone().into_number(quantity.value.kind())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol().is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// The type of a quantity: a numeric kind and a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityType {
    kind: NumberKind,
    unit: Unit,
}

impl QuantityType {
    /// Creates a new quantity type.
    #[must_use]
    pub fn new(kind: NumberKind, unit: impl Into<Unit>) -> Self {
        Self {
            kind,
            unit: unit.into(),
        }
    }

    /// Returns the numeric kind of the type.
    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        self.kind
    }

    /// Returns the unit of the type.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Converts a plain number to a quantity of this type.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Dimension` if the unit of this type is not
    /// dimensionless.
    ///
    /// Returns `ConversionError::Inexact` if the converted value cannot be
    /// represented exactly in an exact kind.
    #[expect(
        clippy::wrong_self_convention,
        reason = "the number is converted from, the type is converted to"
    )]
    pub fn from_number(&self, number: &Number) -> Result<Quantity, ConversionError> {
        let (value, unit) = uconvert_number(&self.unit, number)?.into_parts();
        let value = value.convert_to(self.kind)?;

        Ok(Quantity { value, unit })
    }
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.unit)
    }
}

/// A value that may be a quantity, a plain number, or missing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number with a unit
    Quantity(Quantity),
    /// A plain dimensionless number
    Number(Number),
    /// An absent value, which converts to itself
    Missing,
}

impl Value {
    /// Returns whether the value is missing.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Converts the value to `target`.
    ///
    /// See [`uconvert_value`] for details.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be converted to `target`.
    pub fn uconvert(&self, target: &Unit) -> Result<Self, ConversionError> {
        uconvert_value(target, self)
    }

    /// Converts the value to a quantity of the given type.
    ///
    /// A missing value stays missing.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Quantity::convert_to`] and
    /// [`QuantityType::from_number`].
    pub fn convert_to(&self, target: &QuantityType) -> Result<Self, ConversionError> {
        match self {
            Self::Quantity(quantity) => quantity.convert_to(target).map(Self::Quantity),
            Self::Number(number) => target.from_number(number).map(Self::Quantity),
            Self::Missing => Ok(Self::Missing),
        }
    }
}

impl From<Quantity> for Value {
    fn from(quantity: Quantity) -> Self {
        Self::Quantity(quantity)
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quantity(quantity) => write!(f, "{quantity}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Missing => write!(f, "missing"),
        }
    }
}
