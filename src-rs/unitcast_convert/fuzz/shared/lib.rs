use libfuzzer_sys::arbitrary::{self, Result, Unstructured};
use num_rational::Rational64;
use unitcast_shared::number::Number;
use unitcast_unit::{AffineUnit, BaseDimension, LinearUnit, Scale, Unit};

/// A scale with an exact part of modest size and a power of ten within the
/// range of the SI prefixes.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzScale(pub Scale);

impl<'a> arbitrary::Arbitrary<'a> for FuzzScale {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let inexact = if u.arbitrary::<bool>()? {
            1.0
        } else {
            // keep the floating part away from zero and infinity
            f64::from(u.int_in_range(1..=1_000_000_u32)?) / 1000.0
        };

        let numerator = u.int_in_range(1..=1_000_000_i64)?;
        let denominator = u.int_in_range(1..=1_000_000_i64)?;
        let tens = u.int_in_range(-30..=30)?;

        Ok(Self(Scale::new(
            inexact,
            Rational64::new(numerator, denominator),
            tens,
        )))
    }
}

/// A linear unit of distance with an arbitrary scale.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzDistanceUnit(pub Unit);

impl<'a> arbitrary::Arbitrary<'a> for FuzzDistanceUnit {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let FuzzScale(scale) = u.arbitrary()?;
        let symbol = format!("u{}", u.int_in_range(0..=9_u8)?);

        let unit = LinearUnit::base("m", BaseDimension::Distance).scaled(symbol, scale);
        Ok(Self(unit.into()))
    }
}

/// An affine unit of temperature over a rational multiple of kelvin.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzTemperatureUnit(pub Unit);

impl<'a> arbitrary::Arbitrary<'a> for FuzzTemperatureUnit {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let numerator = u.int_in_range(1..=1000_i64)?;
        let denominator = u.int_in_range(1..=1000_i64)?;
        let absolute = LinearUnit::base("K", BaseDimension::Temperature)
            .scaled("abs", Scale::exact(Rational64::new(numerator, denominator)));

        let zero_numerator = u.int_in_range(-100_000..=100_000_i64)?;
        let zero_denominator = u.int_in_range(1..=100_i64)?;
        let zero_point = Number::rational(zero_numerator, zero_denominator);

        let symbol = format!("°{}", u.int_in_range(0..=9_u8)?);
        Ok(Self(AffineUnit::new(symbol, absolute, zero_point).into()))
    }
}

/// A small exact value, so that conversions never overflow `i64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzExactValue(pub Number);

impl<'a> arbitrary::Arbitrary<'a> for FuzzExactValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let numerator = u.int_in_range(-10_000..=10_000_i64)?;
        let denominator = u.int_in_range(1..=100_i64)?;

        Ok(Self(Number::rational(numerator, denominator)))
    }
}
