//! The scale of a unit relative to the base unit of its dimension
//!
//! A [`Scale`] is the base-factor decomposition of a unit: the unit equals
//! `inexact * exact * 10^tens` base units. Keeping the exact rational part and
//! the power of ten apart from the floating part is what lets conversions
//! between, say, kilometers and inches stay exact.

use std::{fmt, ops};

use num_rational::Rational64;
use num_traits::{CheckedMul, One};
use unitcast_shared::number::rational_to_f64;

/// The decomposed scale of a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    inexact: f64,
    exact: Rational64,
    tens: i32,
}

impl Scale {
    /// Creates a new scale of `inexact * exact * 10^tens`.
    ///
    /// # Panics
    ///
    /// Panics if `inexact` is not finite and positive, or if `exact` is not
    /// positive. A unit is always a positive multiple of its base unit.
    #[must_use]
    pub fn new(inexact: f64, exact: Rational64, tens: i32) -> Self {
        assert!(
            inexact.is_finite() && inexact > 0.0,
            "inexact factor must be finite and positive"
        );
        assert!(
            exact > Rational64::from_integer(0),
            "exact factor must be positive"
        );

        Self {
            inexact,
            exact,
            tens,
        }
    }

    /// The scale of a base unit.
    #[must_use]
    pub fn one() -> Self {
        Self::new(1.0, Rational64::one(), 0)
    }

    /// Creates a scale with only an exact rational part.
    #[must_use]
    pub fn exact(exact: Rational64) -> Self {
        Self::new(1.0, exact, 0)
    }

    /// Creates a scale with only a floating part.
    #[must_use]
    pub fn inexact(inexact: f64) -> Self {
        Self::new(inexact, Rational64::one(), 0)
    }

    /// Creates a scale that is a power of ten.
    #[must_use]
    pub fn tens(tens: i32) -> Self {
        Self::new(1.0, Rational64::one(), tens)
    }

    /// Returns the floating part of the scale.
    #[must_use]
    pub const fn inexact_part(&self) -> f64 {
        self.inexact
    }

    /// Returns the exact rational part of the scale.
    #[must_use]
    pub const fn exact_part(&self) -> Rational64 {
        self.exact
    }

    /// Returns the power of ten of the scale.
    #[must_use]
    pub const fn tens_part(&self) -> i32 {
        self.tens
    }

    /// Returns the floating and exact parts of the scale, leaving out the
    /// power of ten.
    #[must_use]
    pub const fn basefactor(&self) -> (f64, Rational64) {
        (self.inexact, self.exact)
    }

    /// Returns the power of ten of the scale.
    #[must_use]
    pub const fn tensfactor(&self) -> i32 {
        self.tens
    }

    /// Returns the reciprocal of the scale.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self {
            inexact: self.inexact.recip(),
            exact: self.exact.recip(),
            tens: self.tens.saturating_neg(),
        }
    }

    /// Raises the scale to an integer power.
    #[must_use]
    pub fn powi(&self, exponent: i32) -> Self {
        let base = if exponent < 0 { self.recip() } else { *self };

        let mut result = Self::one();
        for _ in 0..exponent.unsigned_abs() {
            result = result * base;
        }

        result
    }

    /// Returns the scale as a single floating point number.
    ///
    /// This is only an approximation, and may overflow for large powers of
    /// ten.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.inexact * rational_to_f64(&self.exact) * 10_f64.powi(self.tens)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::one()
    }
}

impl ops::Mul for Scale {
    type Output = Self;

    /// Multiplies two scales
    ///
    /// If the product of the exact parts does not fit in a `Rational64`, both
    /// exact parts are folded into the floating part instead.
    fn mul(self, rhs: Self) -> Self::Output {
        let tens = self.tens.saturating_add(rhs.tens);

        match self.exact.checked_mul(&rhs.exact) {
            Some(exact) => Self {
                inexact: self.inexact * rhs.inexact,
                exact,
                tens,
            },
            None => Self {
                inexact: self.inexact
                    * rhs.inexact
                    * rational_to_f64(&self.exact)
                    * rational_to_f64(&rhs.exact),
                exact: Rational64::one(),
                tens,
            },
        }
    }
}

impl ops::Div for Scale {
    type Output = Self;

    #[expect(
        clippy::suspicious_arithmetic_impl,
        reason = "division is defined as multiplication by the reciprocal"
    )]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} * {}/{} * 10^{}",
            self.inexact,
            self.exact.numer(),
            self.exact.denom(),
            self.tens
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_keeps_parts_separate() {
        let kilometer = Scale::tens(3);
        let inch = Scale::new(1.0, Rational64::new(127, 5), -3);

        let ratio = kilometer / inch;

        assert_eq!(ratio.exact_part(), Rational64::new(5, 127));
        assert_eq!(ratio.tens_part(), 6);
        assert!((ratio.inexact_part() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reciprocal_round_trip() {
        let scale = Scale::new(0.5, Rational64::new(3, 7), -4);

        assert_eq!(scale.recip().recip(), scale);
        assert_eq!((scale * scale.recip()).exact_part(), Rational64::one());
        assert_eq!((scale * scale.recip()).tens_part(), 0);
    }

    #[test]
    fn exact_overflow_folds_into_inexact() {
        let big = Scale::exact(Rational64::new(i64::MAX, 1));
        let product = big * Scale::exact(Rational64::new(3, 1));

        assert_eq!(product.exact_part(), Rational64::one());
        assert!(product.inexact_part() > 2.7e19);
    }

    #[test]
    fn powers() {
        let minute = Scale::exact(Rational64::from_integer(60));

        assert_eq!(minute.powi(2).exact_part(), Rational64::from_integer(3600));
        assert_eq!(minute.powi(-1).exact_part(), Rational64::new(1, 60));
        assert_eq!(minute.powi(0), Scale::one());
        assert_eq!(Scale::tens(-2).powi(3).tens_part(), -6);
    }

    #[test]
    fn to_f64_combines_all_parts() {
        let scale = Scale::new(2.0, Rational64::new(1, 4), 2);

        assert!((scale.to_f64() - 50.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "exact factor must be positive")]
    fn zero_exact_factor_is_rejected() {
        let _ = Scale::exact(Rational64::from_integer(0));
    }
}
