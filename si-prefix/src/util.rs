use std::sync::LazyLock;

/// Smallest exponent whose power of ten is a normal `f64`
const MIN_POW10: i32 = -307;
/// Largest exponent whose power of ten is finite
const MAX_POW10: i32 = 308;

/// Correctly rounded powers of ten, indexed by `exp - MIN_POW10`.
///
/// `powi` accumulates rounding error, so the table is built from decimal
/// literals which the float parser rounds exactly.
static POWERS_OF_TEN: LazyLock<Vec<f64>> = LazyLock::new(|| {
    (MIN_POW10..=MAX_POW10)
        .map(|exp| format!("1e{exp}").parse::<f64>().unwrap_or_default())
        .collect()
});

/// The `f64` nearest to `10^exp`; saturates to `0.0` / `inf` outside the
/// representable range.
pub fn pow10(exp: i32) -> f64 {
    if exp < MIN_POW10 {
        return 0.0;
    }
    if exp > MAX_POW10 {
        return f64::INFINITY;
    }
    POWERS_OF_TEN[(exp - MIN_POW10) as usize]
}

/// `value / 10^exp`, keeping exact powers of ten exact.
pub(crate) fn scale_down(value: f64, exp: i32) -> f64 {
    if exp < MIN_POW10 {
        // 10^exp is subnormal here; shift into the normal range first
        (value * 1e300) / pow10(exp + 300)
    } else {
        value / pow10(exp)
    }
}

/// `value * 10^exp`, the inverse of [`scale_down`].
pub(crate) fn scale_up(value: f64, exp: i32) -> f64 {
    if exp < MIN_POW10 {
        value * pow10(exp + 300) * 1e-300
    } else if exp > MAX_POW10 {
        value * pow10(exp - 300) * 1e300
    } else {
        value * pow10(exp)
    }
}

/// Truncate to `max_chars` characters, marking the cut with `...`
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(3), 1000.0);
        assert_eq!(pow10(-24), 1e-24);
        assert_eq!(pow10(308), 1e308);
        assert_eq!(pow10(-307), 1e-307);
        assert_eq!(pow10(309), f64::INFINITY);
        assert_eq!(pow10(-400), 0.0);
    }

    #[test]
    fn test_scale_exact_powers() {
        assert_eq!(scale_down(1e-24, -24), 1.0);
        assert_eq!(scale_down(1e24, 24), 1.0);
        assert_eq!(scale_down(4781.123, 3), 4.781123);
        assert_eq!(scale_up(1.0, -6), 1e-6);
        assert_eq!(scale_up(1.0, 6), 1e6);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("1.27 µ", 6), "1.27 µ");
        assert_eq!(truncate_str("123456789", 4), "1234...");
    }
}
