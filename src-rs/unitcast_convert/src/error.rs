//! Errors produced while converting units and quantities

use std::fmt;

use unitcast_shared::{
    error::{AsUnitcastError, Context},
    number::{Number, NumberError, NumberKind},
};
use unitcast_unit::{Dimension, Unit};

use crate::quantity::Quantity;

/// One side of a failed dimension check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionOperand {
    label: String,
    dimension: Dimension,
}

impl DimensionOperand {
    /// Describes a unit.
    #[must_use]
    pub fn unit(unit: &Unit) -> Self {
        Self {
            label: unit.to_string(),
            dimension: unit.dimension().clone(),
        }
    }

    /// Describes a quantity.
    #[must_use]
    pub fn quantity(quantity: &Quantity) -> Self {
        Self {
            label: quantity.to_string(),
            dimension: quantity.unit().dimension().clone(),
        }
    }

    /// Describes a plain number, which is always dimensionless.
    #[must_use]
    pub fn number(number: &Number) -> Self {
        Self {
            label: number.to_string(),
            dimension: Dimension::none(),
        }
    }

    /// Returns the label of the operand, such as `3 m` or `km`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the dimension of the operand.
    #[must_use]
    pub const fn dimension(&self) -> &Dimension {
        &self.dimension
    }
}

/// Two operands of a conversion have different dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionError {
    target: DimensionOperand,
    source: DimensionOperand,
}

impl DimensionError {
    /// Creates a new dimension error.
    #[must_use]
    pub const fn new(target: DimensionOperand, source: DimensionOperand) -> Self {
        Self { target, source }
    }

    /// Returns the operand being converted to.
    #[must_use]
    pub const fn target(&self) -> &DimensionOperand {
        &self.target
    }

    /// Returns the operand being converted from.
    #[must_use]
    pub const fn source(&self) -> &DimensionOperand {
        &self.source
    }
}

impl AsUnitcastError for DimensionError {
    fn message(&self) -> String {
        format!(
            "cannot convert `{}` to `{}` because their dimensions differ",
            self.source.label, self.target.label
        )
    }

    fn context(&self) -> Vec<Context> {
        vec![
            Context::Note(format!(
                "`{}` has dimension {}",
                self.source.label, self.source.dimension
            )),
            Context::Note(format!(
                "`{}` has dimension {}",
                self.target.label, self.target.dimension
            )),
        ]
    }
}

/// A conversion left the representable numeric range.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericRangeError {
    /// The floating conversion factor between two units overflowed to
    /// infinity or underflowed to zero
    Factor {
        /// The unit being converted to
        target: String,
        /// The unit being converted from
        source: String,
        /// The offending factor
        factor: f64,
    },
    /// Applying a factor overflowed the exact numeric kind of the value
    Value {
        /// The kind the value was computed in
        kind: NumberKind,
    },
}

impl AsUnitcastError for NumericRangeError {
    fn message(&self) -> String {
        match self {
            Self::Factor {
                target,
                source,
                factor,
            } => format!(
                "floating point overflow/underflow in the conversion factor from `{source}` to `{target}` ({factor})"
            ),
            Self::Value { kind } => format!("{kind} overflow while converting a value"),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Factor { .. } => vec![Context::Help(
                "this is probably due to large exponents and/or SI prefixes in the units"
                    .to_string(),
            )],
            Self::Value { .. } => vec![Context::Help(
                "convert the value to a floating point kind before converting units".to_string(),
            )],
        }
    }
}

/// An error from converting a unit, quantity, or number.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The dimensions of the operands differ
    Dimension(DimensionError),
    /// A factor or value left the representable range
    NumericRange(NumericRangeError),
    /// A converted value could not be represented exactly in the requested
    /// numeric kind
    Inexact {
        /// The converted value
        value: Number,
        /// The requested kind
        target: NumberKind,
    },
}

impl From<DimensionError> for ConversionError {
    fn from(error: DimensionError) -> Self {
        Self::Dimension(error)
    }
}

impl From<NumericRangeError> for ConversionError {
    fn from(error: NumericRangeError) -> Self {
        Self::NumericRange(error)
    }
}

impl From<NumberError> for ConversionError {
    fn from(error: NumberError) -> Self {
        match error {
            NumberError::Overflow { kind } => Self::NumericRange(NumericRangeError::Value { kind }),
            NumberError::Inexact { value, target } => Self::Inexact { value, target },
        }
    }
}

impl AsUnitcastError for ConversionError {
    fn message(&self) -> String {
        match self {
            Self::Dimension(error) => error.message(),
            Self::NumericRange(error) => error.message(),
            Self::Inexact { value, target } => NumberError::Inexact {
                value: *value,
                target: *target,
            }
            .message(),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Dimension(error) => error.context(),
            Self::NumericRange(error) => error.context(),
            Self::Inexact { .. } => vec![],
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use unitcast_builtins::units;

    use super::*;

    #[test]
    fn dimension_error_names_both_operands() {
        let error = DimensionError::new(
            DimensionOperand::unit(&units::second().into()),
            DimensionOperand::unit(&units::meter().into()),
        );

        assert_eq!(
            error.message(),
            "cannot convert `m` to `s` because their dimensions differ"
        );
        assert_eq!(
            error.context(),
            vec![
                Context::Note("`m` has dimension Distance".to_string()),
                Context::Note("`s` has dimension Time".to_string()),
            ]
        );
    }

    #[test]
    fn numbers_are_dimensionless_operands() {
        let operand = DimensionOperand::number(&Number::Integer(3));

        assert_eq!(operand.label(), "3");
        assert!(operand.dimension().is_none());
    }

    #[test]
    fn number_errors_map_to_conversion_errors() {
        let overflow = ConversionError::from(NumberError::Overflow {
            kind: NumberKind::Integer,
        });
        let inexact = ConversionError::from(NumberError::Inexact {
            value: Number::Float64(2.5),
            target: NumberKind::Integer,
        });

        assert!(matches!(
            overflow,
            ConversionError::NumericRange(NumericRangeError::Value {
                kind: NumberKind::Integer
            })
        ));
        assert_eq!(
            inexact.to_string(),
            "2.5 cannot be represented exactly as integer"
        );
    }

    #[test]
    fn factor_overflow_blames_prefixes() {
        let error = ConversionError::from(NumericRangeError::Factor {
            target: "qm".to_string(),
            source: "Qm".to_string(),
            factor: f64::INFINITY,
        });

        assert!(error.to_string().contains("overflow/underflow"));
        assert!(error.context()[0].text().contains("SI prefixes"));
    }
}
