//! Floating point comparison

/// The default tolerance used by [`is_close`].
pub const TOLERANCE: f64 = 1e-10;

/// The relative tolerance used by [`is_approx`], `sqrt(f64::EPSILON)`.
///
/// This is exactly `2^-26`.
pub const APPROX_RELATIVE_TOLERANCE: f64 = 1.490_116_119_384_765_6e-8;

/// Checks if two floating point numbers are close to each other.
///
/// This function uses the `Strong` comparison method defined in the
/// `is_close` crate as reference. See
/// <https://github.com/PM4Rs/is_close/blob/8475cd292946b6e5461375a41160153ce32e31c6/src/lib.rs#L183>
/// for more details.
///
/// The tolerance is fixed at [`TOLERANCE`], both relative and absolute.
#[must_use]
pub const fn is_close(a: f64, b: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "this is a part of implementing better floating point comparison"
    )]
    if a == b {
        return true;
    }

    if a.is_infinite() || b.is_infinite() {
        return false;
    }

    if a.is_nan() || b.is_nan() {
        return false;
    }

    let difference = (a - b).abs();
    let relative_tolerance = TOLERANCE * f64::min(a.abs(), b.abs());
    let absolute_tolerance = TOLERANCE;

    difference <= relative_tolerance || difference <= absolute_tolerance
}

/// Checks if two floating point numbers are approximately equal using only a
/// relative tolerance of [`APPROX_RELATIVE_TOLERANCE`].
///
/// Unlike [`is_close`], there is no absolute tolerance, so tiny values are
/// only approximately equal to other tiny values of the same magnitude. This
/// is the check used to decide whether a floating coefficient is a no-op
/// multiplier.
#[must_use]
pub const fn is_approx(a: f64, b: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "this is a part of implementing better floating point comparison"
    )]
    if a == b {
        return true;
    }

    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let difference = (a - b).abs();
    difference <= APPROX_RELATIVE_TOLERANCE * f64::max(a.abs(), b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_values() {
        assert!(is_close(1.0, 1.0 + 1e-12));
        assert!(is_close(0.0, 1e-11));
        assert!(!is_close(1.0, 1.001));
        assert!(!is_close(f64::NAN, f64::NAN));
        assert!(is_close(f64::INFINITY, f64::INFINITY));
        assert!(!is_close(f64::INFINITY, f64::MAX));
    }

    #[test]
    fn approx_is_relative() {
        assert!(is_approx(1.0, 1.0 + 1e-9));
        assert!(!is_approx(1.0, 1.0 + 1e-7));
        assert!(!is_approx(0.0, 1e-300));
        assert!(is_approx(1e300, 1e300 * (1.0 + 1e-10)));
        assert!(!is_approx(f64::NAN, 1.0));
    }

    #[test]
    fn approx_tolerance_is_sqrt_epsilon() {
        assert!(is_close(APPROX_RELATIVE_TOLERANCE, f64::EPSILON.sqrt()));
    }
}
