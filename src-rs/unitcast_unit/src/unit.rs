//! Linear and affine unit descriptors

use std::{fmt, ops};

use num_rational::Rational64;
use unitcast_shared::number::Number;

use crate::{BaseDimension, Dimension, Prefix, Scale};

/// A unit that is a pure multiple of the base unit of its dimension.
///
/// The symbol is only used for diagnostics. Two units with the same
/// dimension and scale but different symbols (`N*m` and `J`) are different
/// units that convert to each other with a factor of one.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearUnit {
    symbol: String,
    dimension: Dimension,
    scale: Scale,
}

impl LinearUnit {
    /// Creates a new linear unit.
    #[must_use]
    pub fn new(symbol: impl Into<String>, dimension: Dimension, scale: Scale) -> Self {
        Self {
            symbol: symbol.into(),
            dimension,
            scale,
        }
    }

    /// Creates the unit of dimensionless numbers.
    #[must_use]
    pub fn unitless() -> Self {
        Self::new("", Dimension::none(), Scale::one())
    }

    /// Creates the base unit of a base dimension.
    #[must_use]
    pub fn base(symbol: impl Into<String>, base: BaseDimension) -> Self {
        Self::new(symbol, Dimension::base(base), Scale::one())
    }

    /// Returns the symbol of the unit.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the dimension of the unit.
    #[must_use]
    pub const fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Returns the scale of the unit relative to the base unit of its
    /// dimension.
    #[must_use]
    pub const fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Determines if the unit is unitless.
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.dimension.is_none()
    }

    /// Gives the unit a new symbol, keeping its dimension and scale.
    #[must_use]
    pub fn renamed(self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..self
        }
    }

    /// Applies an SI prefix to the unit.
    #[must_use]
    pub fn with_prefix(&self, prefix: Prefix) -> Self {
        Self {
            symbol: format!("{prefix}{}", self.symbol),
            dimension: self.dimension.clone(),
            scale: self.scale * Scale::tens(prefix.tens()),
        }
    }

    /// Defines a new unit as `factor` of this unit.
    ///
    /// For example, a minute is `second.scaled("min", Scale::exact(60))`.
    #[must_use]
    pub fn scaled(&self, symbol: impl Into<String>, factor: Scale) -> Self {
        Self {
            symbol: symbol.into(),
            dimension: self.dimension.clone(),
            scale: self.scale * factor,
        }
    }

    /// Raises the unit to an integer power.
    #[must_use]
    pub fn powi(&self, exponent: i32) -> Self {
        Self {
            symbol: format!("{}^{exponent}", self.symbol),
            dimension: self.dimension.powi(exponent),
            scale: self.scale.powi(exponent),
        }
    }
}

fn combine_symbols(lhs: &str, op: &str, rhs: &str) -> String {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) => String::new(),
        (false, true) => lhs.to_string(),
        (true, false) if op == "*" => rhs.to_string(),
        (true, false) => format!("1{op}{rhs}"),
        (false, false) => format!("{lhs}{op}{rhs}"),
    }
}

impl ops::Mul for LinearUnit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            symbol: combine_symbols(&self.symbol, "*", &rhs.symbol),
            dimension: self.dimension * rhs.dimension,
            scale: self.scale * rhs.scale,
        }
    }
}

impl ops::Div for LinearUnit {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self {
            symbol: combine_symbols(&self.symbol, "/", &rhs.symbol),
            dimension: self.dimension / rhs.dimension,
            scale: self.scale / rhs.scale,
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

/// A unit whose zero is offset from the zero of an absolute linear unit,
/// such as degrees Celsius over kelvin.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineUnit {
    symbol: String,
    absolute: LinearUnit,
    zero_point: Number,
}

impl AffineUnit {
    /// Creates a new affine unit.
    ///
    /// `zero_point` is the reading of this unit that corresponds to zero of
    /// the absolute unit. For degrees Celsius over kelvin it is `-5463/20`,
    /// since absolute zero is -273.15 °C.
    #[must_use]
    pub fn new(symbol: impl Into<String>, absolute: LinearUnit, zero_point: Number) -> Self {
        Self {
            symbol: symbol.into(),
            absolute,
            zero_point,
        }
    }

    /// Creates an affine unit from an exact rational zero point.
    #[must_use]
    pub fn with_exact_zero_point(
        symbol: impl Into<String>,
        absolute: LinearUnit,
        zero_point: Rational64,
    ) -> Self {
        Self::new(symbol, absolute, Number::Rational(zero_point))
    }

    /// Returns the symbol of the unit.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the linear unit this unit is offset from.
    #[must_use]
    pub const fn absolute(&self) -> &LinearUnit {
        &self.absolute
    }

    /// Returns the reading of this unit at the absolute unit's zero.
    #[must_use]
    pub const fn zero_point(&self) -> &Number {
        &self.zero_point
    }
}

impl fmt::Display for AffineUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A unit, either linear or affine.
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    /// A pure multiple of a base unit
    Linear(LinearUnit),
    /// An offset scale over a linear unit
    Affine(AffineUnit),
}

impl Unit {
    /// Creates the unit of dimensionless numbers.
    #[must_use]
    pub fn unitless() -> Self {
        Self::Linear(LinearUnit::unitless())
    }

    /// Returns the symbol of the unit.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Linear(unit) => unit.symbol(),
            Self::Affine(unit) => unit.symbol(),
        }
    }

    /// Returns the dimension of the unit.
    #[must_use]
    pub const fn dimension(&self) -> &Dimension {
        self.absolute_unit().dimension()
    }

    /// Determines if the unit has the same dimension as the given unit.
    ///
    /// For example, `km` and `inch` are dimensionally equal, while `km` and
    /// `km/h` are not.
    #[must_use]
    pub fn dimensionally_eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
    }

    /// Determines if the unit is unitless.
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.dimension().is_none()
    }

    /// Returns the linear unit underlying the unit.
    ///
    /// For a linear unit this is the unit itself.
    #[must_use]
    pub const fn absolute_unit(&self) -> &LinearUnit {
        match self {
            Self::Linear(unit) => unit,
            Self::Affine(unit) => unit.absolute(),
        }
    }

    /// Returns the floating and exact parts of the scale of the absolute
    /// unit.
    #[must_use]
    pub const fn basefactor(&self) -> (f64, Rational64) {
        self.absolute_unit().scale().basefactor()
    }

    /// Returns the power of ten of the scale of the absolute unit.
    #[must_use]
    pub const fn tensfactor(&self) -> i32 {
        self.absolute_unit().scale().tensfactor()
    }

    /// Determines if the unit is affine.
    #[must_use]
    pub const fn is_affine(&self) -> bool {
        matches!(self, Self::Affine(_))
    }

    /// Returns the zero point of an affine unit, or `None` for a linear unit.
    #[must_use]
    pub const fn zero_point(&self) -> Option<&Number> {
        match self {
            Self::Linear(_) => None,
            Self::Affine(unit) => Some(unit.zero_point()),
        }
    }
}

impl From<LinearUnit> for Unit {
    fn from(unit: LinearUnit) -> Self {
        Self::Linear(unit)
    }
}

impl From<AffineUnit> for Unit {
    fn from(unit: AffineUnit) -> Self {
        Self::Affine(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear(unit) => write!(f, "{unit}"),
            Self::Affine(unit) => write!(f, "{unit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> LinearUnit {
        LinearUnit::base("m", BaseDimension::Distance)
    }

    fn second() -> LinearUnit {
        LinearUnit::base("s", BaseDimension::Time)
    }

    fn kelvin() -> LinearUnit {
        LinearUnit::base("K", BaseDimension::Temperature)
    }

    #[test]
    fn prefix_adds_to_tens() {
        let kilometer = meter().with_prefix(Prefix::Kilo);

        assert_eq!(kilometer.symbol(), "km");
        assert_eq!(kilometer.scale().tensfactor(), 3);
        assert_eq!(kilometer.dimension(), meter().dimension());
    }

    #[test]
    fn composition_combines_dimension_and_scale() {
        let hour = second().scaled("hr", Scale::exact(Rational64::from_integer(3600)));
        let speed = meter().with_prefix(Prefix::Kilo) / hour;

        assert_eq!(speed.symbol(), "km/hr");
        assert_eq!(speed.scale().exact_part(), Rational64::new(1, 3600));
        assert_eq!(speed.scale().tensfactor(), 3);
        assert_eq!(
            speed.dimension(),
            &(Dimension::base(BaseDimension::Distance) / Dimension::base(BaseDimension::Time))
        );
    }

    #[test]
    fn unitless_symbols_collapse() {
        let inverse = LinearUnit::unitless() / second();
        let same = LinearUnit::unitless() * meter();

        assert_eq!(inverse.symbol(), "1/s");
        assert_eq!(same.symbol(), "m");
        assert_eq!(LinearUnit::unitless().to_string(), "1");
    }

    #[test]
    fn powers_scale_exponents() {
        let square_centimeter = meter().with_prefix(Prefix::Centi).powi(2);

        assert_eq!(square_centimeter.scale().tensfactor(), -4);
        assert_eq!(square_centimeter.dimension(), &meter().dimension().powi(2));
    }

    #[test]
    fn affine_unit_exposes_its_absolute_unit() {
        let celsius: Unit =
            AffineUnit::with_exact_zero_point("°C", kelvin(), Rational64::new(-27315, 100)).into();

        assert!(celsius.is_affine());
        assert_eq!(celsius.absolute_unit(), &kelvin());
        assert_eq!(celsius.zero_point(), Some(&Number::rational(-5463, 20)));
        assert_eq!(celsius.dimension(), kelvin().dimension());
        assert_eq!(celsius.basefactor(), (1.0, Rational64::from_integer(1)));
        assert_eq!(celsius.tensfactor(), 0);
    }

    #[test]
    fn linear_unit_has_no_zero_point() {
        let meter: Unit = meter().into();

        assert!(!meter.is_affine());
        assert_eq!(meter.zero_point(), None);
        assert!(!meter.is_unitless());
        assert!(Unit::unitless().is_unitless());
    }

    #[test]
    fn renamed_units_keep_scale_but_differ() {
        let newton_meter: Unit = (meter() * meter()).into();
        let renamed: Unit = (meter() * meter()).renamed("m2").into();

        assert!(newton_meter.dimensionally_eq(&renamed));
        assert_ne!(newton_meter, renamed);
        assert_eq!(newton_meter.basefactor(), renamed.basefactor());
    }
}
