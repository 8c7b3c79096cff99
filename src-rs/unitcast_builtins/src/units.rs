//! Builtin unit constructors
//!
//! Mass is based on the kilogram, but the gram is the unit prefixes attach
//! to, so the gram is defined as `10^-3` base units and the kilogram is
//! `kilo(gram)`.

use std::f64::consts::PI;

use num_rational::Rational64;
use unitcast_unit::{AffineUnit, BaseDimension, LinearUnit, Prefix, Scale};

fn exact(numerator: i64, denominator: i64) -> Scale {
    Scale::exact(Rational64::new(numerator, denominator))
}

/// The unit of dimensionless numbers.
#[must_use]
pub fn unitless() -> LinearUnit {
    LinearUnit::unitless()
}

/// Percent, `1/100`.
#[must_use]
pub fn percent() -> LinearUnit {
    unitless().scaled("%", exact(1, 100))
}

/// Radian, the dimensionless unit of angle.
#[must_use]
pub fn radian() -> LinearUnit {
    unitless().scaled("rad", Scale::one())
}

/// Degree of angle, `π/180` radians.
#[must_use]
pub fn degree() -> LinearUnit {
    radian().scaled("°", Scale::inexact(PI / 180.0))
}

/// Meter, the base unit of distance.
#[must_use]
pub fn meter() -> LinearUnit {
    LinearUnit::base("m", BaseDimension::Distance)
}

/// Kilometer.
#[must_use]
pub fn kilometer() -> LinearUnit {
    meter().with_prefix(Prefix::Kilo)
}

/// Centimeter.
#[must_use]
pub fn centimeter() -> LinearUnit {
    meter().with_prefix(Prefix::Centi)
}

/// International inch, exactly 2.54 cm.
#[must_use]
pub fn inch() -> LinearUnit {
    meter().scaled("inch", Scale::new(1.0, Rational64::new(127, 5), -3))
}

/// International foot, 12 inches.
#[must_use]
pub fn foot() -> LinearUnit {
    inch().scaled("ft", exact(12, 1))
}

/// International mile, 5280 feet.
#[must_use]
pub fn mile() -> LinearUnit {
    foot().scaled("mi", exact(5280, 1))
}

/// Liter, a cubic decimeter.
#[must_use]
pub fn liter() -> LinearUnit {
    meter().with_prefix(Prefix::Deci).powi(3).renamed("L")
}

/// Gram, `10^-3` kilograms.
#[must_use]
pub fn gram() -> LinearUnit {
    LinearUnit::base("g", BaseDimension::Mass).scaled("g", Scale::tens(-3))
}

/// Kilogram, the base unit of mass.
#[must_use]
pub fn kilogram() -> LinearUnit {
    gram().with_prefix(Prefix::Kilo)
}

/// Second, the base unit of time.
#[must_use]
pub fn second() -> LinearUnit {
    LinearUnit::base("s", BaseDimension::Time)
}

/// Minute, 60 seconds.
#[must_use]
pub fn minute() -> LinearUnit {
    second().scaled("min", exact(60, 1))
}

/// Hour, 3600 seconds.
#[must_use]
pub fn hour() -> LinearUnit {
    minute().scaled("hr", exact(60, 1))
}

/// Day, 86400 seconds.
#[must_use]
pub fn day() -> LinearUnit {
    hour().scaled("d", exact(24, 1))
}

/// Hertz, one per second.
#[must_use]
pub fn hertz() -> LinearUnit {
    (unitless() / second()).renamed("Hz")
}

/// Ampere, the base unit of current.
#[must_use]
pub fn ampere() -> LinearUnit {
    LinearUnit::base("A", BaseDimension::Current)
}

/// Mole, the base unit of amount of substance.
#[must_use]
pub fn mole() -> LinearUnit {
    LinearUnit::base("mol", BaseDimension::Substance)
}

/// Candela, the base unit of luminous intensity.
#[must_use]
pub fn candela() -> LinearUnit {
    LinearUnit::base("cd", BaseDimension::LuminousIntensity)
}

/// Bit, the base unit of information.
#[must_use]
pub fn bit() -> LinearUnit {
    LinearUnit::base("b", BaseDimension::Information)
}

/// Byte, 8 bits.
#[must_use]
pub fn byte() -> LinearUnit {
    bit().scaled("B", exact(8, 1))
}

/// Newton, `kg*m/s^2`.
#[must_use]
pub fn newton() -> LinearUnit {
    (kilogram() * meter() / second().powi(2)).renamed("N")
}

/// Newton meter, the unit of torque, `N*m`.
#[must_use]
pub fn newton_meter() -> LinearUnit {
    newton() * meter()
}

/// Joule, `N*m`.
#[must_use]
pub fn joule() -> LinearUnit {
    newton_meter().renamed("J")
}

/// Watt, `J/s`.
#[must_use]
pub fn watt() -> LinearUnit {
    (joule() / second()).renamed("W")
}

/// Electronvolt, `1.602176634e-19 J`.
#[must_use]
pub fn electronvolt() -> LinearUnit {
    joule().scaled("eV", Scale::new(1.602_176_634, Rational64::from_integer(1), -19))
}

/// Kelvin, the base unit of temperature.
#[must_use]
pub fn kelvin() -> LinearUnit {
    LinearUnit::base("K", BaseDimension::Temperature)
}

/// Rankine, `5/9` kelvin.
#[must_use]
pub fn rankine() -> LinearUnit {
    kelvin().scaled("Ra", exact(5, 9))
}

/// Degree Celsius, offset from kelvin so that absolute zero reads -273.15.
#[must_use]
pub fn celsius() -> AffineUnit {
    AffineUnit::with_exact_zero_point("°C", kelvin(), Rational64::new(-27315, 100))
}

/// Degree Fahrenheit, offset from rankine so that absolute zero reads
/// -459.67.
#[must_use]
pub fn fahrenheit() -> AffineUnit {
    AffineUnit::with_exact_zero_point("°F", rankine(), Rational64::new(-45967, 100))
}
