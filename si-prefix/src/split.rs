//! Normalization of a value into an SI mantissa and exponent

use tracing::trace;

use crate::util::scale_down;

/// Split `value` into a mantissa and an exponent of ten that is a multiple of 3.
///
/// `mantissa * 10^expof10 == value`, and `1 <= |mantissa| < 1000` for every
/// finite non-zero input. Zero returns `(0.0, 0)`; NaN and infinities are
/// returned unchanged with exponent 0.
///
/// # Examples
/// ```
/// use si_prefix::split;
///
/// assert_eq!(split(4781.123), (4.781123, 3));
/// assert_eq!(split(0.04781), (47.809999999999995, -3));
/// assert_eq!(split(0.0), (0.0, 0));
/// ```
pub fn split(value: f64) -> (f64, i32) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }

    let negative = value < 0.0;
    let abs = value.abs();

    // log10 is only an estimate near powers of ten; the checks below fix it up
    let estimate = abs.log10().floor() as i32;
    let mut expof10 = estimate.div_euclid(3) * 3;
    let mut mantissa = scale_down(abs, expof10);

    if mantissa >= 1000.0 {
        expof10 += 3;
        mantissa = scale_down(abs, expof10).max(1.0);
    } else if mantissa < 1.0 {
        expof10 -= 3;
        mantissa = scale_down(abs, expof10);
        if mantissa >= 1000.0 {
            // abs is the float just below 10^(expof10 + 3)
            expof10 += 3;
            mantissa = 1.0;
        }
    }
    trace!(value, mantissa, expof10, "split");

    (if negative { -mantissa } else { mantissa }, expof10)
}
