//! Physical dimensions as maps of base dimensions to rational exponents

use std::{fmt, ops};

use indexmap::IndexMap;
use num_rational::Rational32;
use num_traits::{One, Zero};

/// The dimension of a base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Base unit is 'kilogram'
    Mass,
    /// Base unit is 'meter'
    Distance,
    /// Base unit is 'second'
    Time,
    /// Base unit is 'kelvin'
    Temperature,
    /// Base unit is 'ampere'
    Current,
    /// Base unit is 'bit'
    Information,
    /// Base unit is 'USD'
    Currency,
    /// Base unit is 'mole'
    Substance,
    /// Base unit is 'candela'
    LuminousIntensity,
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mass => "Mass",
            Self::Distance => "Distance",
            Self::Time => "Time",
            Self::Temperature => "Temperature",
            Self::Current => "Current",
            Self::Information => "Information",
            Self::Currency => "Currency",
            Self::Substance => "Substance",
            Self::LuminousIntensity => "LuminousIntensity",
        };
        write!(f, "{name}")
    }
}

/// A map of base dimensions and their exponents.
///
/// For example, velocity is represented as
/// `Dimension(IndexMap::from([(BaseDimension::Distance, 1), (BaseDimension::Time, -1)]))`.
///
/// Zero exponents are never stored, so a missing base dimension reads as an
/// exponent of zero.
#[derive(Debug, Clone, Default)]
pub struct Dimension(IndexMap<BaseDimension, Rational32>);

impl Dimension {
    /// Creates a dimension from base dimensions and their exponents.
    ///
    /// Repeated base dimensions have their exponents summed, and base
    /// dimensions whose exponent ends up as zero are dropped.
    #[must_use]
    pub fn new(exponents: impl IntoIterator<Item = (BaseDimension, Rational32)>) -> Self {
        let mut map = IndexMap::new();

        for (base, exponent) in exponents {
            map.entry(base)
                .and_modify(|value| *value += exponent)
                .or_insert(exponent);
        }

        Self::without_zeros(map)
    }

    /// Creates the dimension of a dimensionless quantity.
    #[must_use]
    pub fn none() -> Self {
        Self(IndexMap::new())
    }

    /// Creates the dimension of a single base dimension with exponent one.
    #[must_use]
    pub fn base(base: BaseDimension) -> Self {
        Self(IndexMap::from([(base, Rational32::one())]))
    }

    /// Checks if the dimension is dimensionless (has no base dimensions).
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of the given base dimension, which is zero if the
    /// base dimension is absent.
    #[must_use]
    pub fn exponent(&self, base: BaseDimension) -> Rational32 {
        self.0.get(&base).copied().unwrap_or_else(Rational32::zero)
    }

    /// Returns an iterator over the base dimensions and their exponents.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, Rational32)> + '_ {
        self.0.iter().map(|(base, exponent)| (*base, *exponent))
    }

    /// Raises the dimension to an integer power.
    #[must_use]
    pub fn powi(&self, exponent: i32) -> Self {
        self.pow(Rational32::from_integer(exponent))
    }

    /// Raises the dimension to a rational power.
    #[must_use]
    pub fn pow(&self, exponent: Rational32) -> Self {
        Self::without_zeros(
            self.0
                .iter()
                .map(|(base, value)| (*base, *value * exponent))
                .collect(),
        )
    }

    fn without_zeros(map: IndexMap<BaseDimension, Rational32>) -> Self {
        Self(
            map.into_iter()
                .filter(|(_, exponent)| !exponent.is_zero())
                .collect(),
        )
    }
}

impl PartialEq for Dimension {
    /// Checks if two dimensions are equal
    ///
    /// Exponents are exact rationals, so unlike floating point exponents no
    /// tolerance is involved. The order in which base dimensions were added
    /// does not matter.
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }

        self.0
            .iter()
            .all(|(base, exponent)| other.0.get(base) == Some(exponent))
    }
}

impl Eq for Dimension {}

impl ops::Mul for Dimension {
    type Output = Self;

    /// Multiplies two dimensions together
    ///
    /// For example, `(Distance/Time) * (Mass) = (Mass*Distance/Time)`
    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = self.0;

        for (key, value) in rhs.0 {
            result
                .entry(key)
                .and_modify(|v| *v += value)
                .or_insert(value);
        }

        Self::without_zeros(result)
    }
}

impl ops::Div for Dimension {
    type Output = Self;

    /// Divides two dimensions
    ///
    /// For example, `(Mass*Distance/Time) / (Mass) = (Distance/Time)`
    fn div(self, rhs: Self) -> Self::Output {
        let mut result = self.0;

        for (key, value) in rhs.0 {
            #[expect(
                clippy::suspicious_arithmetic_impl,
                reason = "division is defined as subtraction of the exponent"
            )]
            result
                .entry(key)
                .and_modify(|v| *v -= value)
                .or_insert(-value);
        }

        Self::without_zeros(result)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "dimensionless");
        }

        for (index, (base, exponent)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, "*")?;
            }

            write!(f, "{base}")?;

            if !exponent.is_one() {
                write!(f, "^{exponent}")?;
            }
        }

        Ok(())
    }
}
