use std::{fmt, str::FromStr};

use crate::error::{SiError, SiResult};
use crate::format::SiFormatter;
use crate::parser::si_parse;
use crate::prefix::prefix;
use crate::split::split;
use crate::util::scale_up;

/// A value normalized to a mantissa and an exponent of ten that is a
/// multiple of 3.
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiValue {
    pub mantissa: f64,
    pub expof10: i32,
}

impl SiValue {
    pub fn new(value: f64) -> Self {
        let (mantissa, expof10) = split(value);
        Self { mantissa, expof10 }
    }

    /// Recombine mantissa and exponent into a plain value
    pub fn value(&self) -> f64 {
        scale_up(self.mantissa, self.expof10)
    }

    /// The prefix symbol, or an error beyond yocto/yotta
    pub fn prefix(&self) -> SiResult<char> {
        prefix(self.expof10)
    }
}

impl From<f64> for SiValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SiValue> for f64 {
    fn from(value: SiValue) -> Self {
        value.value()
    }
}

impl fmt::Display for SiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            SiFormatter::default().format_parts(self.mantissa, self.expof10)
        )
    }
}

impl FromStr for SiValue {
    type Err = SiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        si_parse(s).map(Self::new)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_value() {
        let v = SiValue::new(4781.123);
        assert_eq!(v, SiValue { mantissa: 4.781123, expof10: 3 });
        assert_eq!(v.prefix().unwrap(), 'k');
        assert_eq!(SiValue::new(1e-24).value(), 1e-24);
        assert_eq!(f64::from(SiValue::from(2.5e6)), 2.5e6);
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(SiValue::new(6946.03).to_string(), "6.95 k");
        let v: SiValue = "1.27 µ".parse().unwrap();
        assert_eq!(v.expof10, -6);
        assert_eq!(v.prefix().unwrap(), 'µ');
        assert!("nope".parse::<SiValue>().is_err());
    }

    #[test]
    fn test_out_of_range_prefix() {
        let v = SiValue::new(1.55051e28);
        assert_eq!(v.expof10, 27);
        assert_eq!(v.prefix(), Err(SiError::ExponentOutOfRange { expof10: 27 }));
        assert_eq!(v.to_string(), "15.51e+27");
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn test_serde() {
        let v = SiValue::new(2.5e6);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"mantissa":2.5,"expof10":6}"#);
        let back: SiValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
