//! Tests for parsing prefixed and exponential strings

#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use rstest::rstest;
use si_prefix::{si_parse, SiError, SiValue};

// ============================================================================
// Round Trips
// ============================================================================

test_si!(roundtrip: test_roundtrip_yocto, 1.764e-24);
test_si!(roundtrip: test_roundtrip_micro, 1.26544e-06);
test_si!(roundtrip: test_roundtrip_base, 3.93766);
test_si!(roundtrip: test_roundtrip_kilo, 6946.03);
test_si!(roundtrip: test_roundtrip_exa, 2.82475e18);
test_si!(roundtrip: test_roundtrip_negative, -5.14617e8);
test_si!(roundtrip: test_roundtrip_fallback, 1.55051e28);
test_si!(roundtrip: test_roundtrip_tiny_fallback, 3.3e-28);

// ============================================================================
// Accepted Inputs
// ============================================================================

#[rstest]
#[case::micro_sign("1.27 µ", 1.27e-6)]
#[case::no_space("6.95k", 6950.0)]
#[case::base_unit("3.94 ", 3.94)]
#[case::plain_integer("165", 165.0)]
#[case::leading_plus("+2 G", 2e9)]
#[case::fraction_only(".5 m", 0.0005)]
#[case::negative_exponent("-4.5e-3", -0.0045)]
#[case::uppercase_exponent("2E3", 2000.0)]
#[case::exa_not_exponent("2E", 2e18)]
#[case::surrounding_whitespace("\t7.5 M\n", 7.5e6)]
#[case::yotta("369.17 Y", 3.6917e26)]
fn test_parse_accepts(#[case] input: &str, #[case] expected: f64) {
    let parsed = si_parse(input).unwrap();
    assert!(
        ((parsed - expected) / expected).abs() < 1e-12,
        "{input:?} -> {parsed}, expected {expected}"
    );
}

// ============================================================================
// Rejected Inputs
// ============================================================================

#[rstest]
#[case::letters("abc")]
#[case::empty("")]
#[case::whitespace(" \t ")]
#[case::bare_exponent("e3")]
#[case::bare_prefix("M")]
#[case::unknown_prefix("3 K")]
#[case::ascii_micro("1.27 u")]
#[case::space_before_exponent("1 e3")]
#[case::prefix_and_exponent("1e3k")]
#[case::trailing_text("6.95 k ohm")]
#[case::double_dot("1..5")]
fn test_parse_rejects(#[case] input: &str) {
    let err = si_parse(input).unwrap_err();
    match err {
        SiError::InvalidInput { input: ref reported, .. } => assert_eq!(reported, input),
        other => panic!("expected InvalidInput for {input:?}, got {other:?}"),
    }
}

#[test]
fn test_parse_into_si_value() {
    let v: SiValue = "6.95k".parse().unwrap();
    assert_eq!(v.expof10, 3);
    assert!((v.mantissa - 6.95).abs() < 1e-12);
    assert!(matches!(
        "".parse::<SiValue>(),
        Err(SiError::InvalidInput { .. })
    ));
}
