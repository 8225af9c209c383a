//! Shared test macros for si-prefix tests

#![allow(clippy::unwrap_used)]

/// Unified macro for formatting and round-trip tests
///
/// # Variants
///
/// ## Test exact default formatting
/// ```ignore
/// test_si!(test_name, 6946.03, "6.95 k");
/// ```
///
/// ## Test that formatting then parsing stays within 1% of the value
/// ```ignore
/// test_si!(roundtrip: test_name, 6946.03);
/// ```
#[macro_export]
macro_rules! test_si {
    ($test_name:ident, $value:expr, $expected:expr) => {
        #[test]
        fn $test_name() {
            assert_eq!(si_prefix::si_format($value), $expected);
        }
    };

    (roundtrip: $test_name:ident, $value:expr) => {
        #[test]
        fn $test_name() {
            let value: f64 = $value;
            let formatted = si_prefix::si_format(value);
            let parsed = si_prefix::si_parse(&formatted).unwrap();
            let relative = ((parsed - value) / value).abs();
            assert!(
                relative < 0.01,
                "{value} -> {formatted:?} -> {parsed} (off by {relative})"
            );
        }
    };
}
