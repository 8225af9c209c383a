//! Rendering values with SI prefixes
//!
//! A value is normalized with [`split`](crate::split), then rendered with the
//! prefixed template. When the exponent has no prefix symbol (beyond yocto or
//! yotta) the fallback template is used instead, still grouped by thousands:
//! `1.55051e28` becomes `"15.51e+27"`.

mod spec;
mod template;

pub use spec::{Align, FormatSpec, NumberKind, Sign};
pub use template::{Field, Placeholder, Segment, Template};

use tracing::debug;

use crate::error::{SiError, SiResult};
use crate::prefix::prefix;
use crate::split::split;

/// Default template for values with a prefix symbol
pub const DEFAULT_FORMAT: &str = "{value:.2f} {prefix}";
/// Default template for values outside the prefix range
pub const DEFAULT_EXP_FORMAT: &str = "{value:.2f}e{expof10}";

/// Pair of compiled templates used to render values
#[derive(Debug, Clone, PartialEq)]
pub struct SiFormatter {
    format: Template,
    exp_format: Template,
}

impl Default for SiFormatter {
    fn default() -> Self {
        let value = || {
            Segment::Placeholder(Placeholder {
                field: Field::Value,
                spec: FormatSpec::fixed(2),
            })
        };
        let text = |field| {
            Segment::Placeholder(Placeholder {
                field,
                spec: FormatSpec::default(),
            })
        };
        Self {
            format: Template::from_segments(
                DEFAULT_FORMAT,
                vec![value(), Segment::Literal(" ".to_string()), text(Field::Prefix)],
            ),
            exp_format: Template::from_segments(
                DEFAULT_EXP_FORMAT,
                vec![value(), Segment::Literal("e".to_string()), text(Field::Expof10)],
            ),
        }
    }
}

/// Make sure `template` only references `value` and `label`
fn check_fields(template: &Template, label: Field) -> SiResult<()> {
    match template
        .fields()
        .find(|&f| f != Field::Value && f != label)
    {
        Some(field) => Err(SiError::invalid_template(
            template.source(),
            format!(
                "placeholder '{}' is not available here, expected 'value' or '{}'",
                field.name(),
                label.name()
            ),
        )),
        None => Ok(()),
    }
}

impl SiFormatter {
    /// Compile a formatter from a prefixed template (`{value}`, `{prefix}`)
    /// and a fallback template (`{value}`, `{expof10}`).
    ///
    /// # Examples
    /// ```
    /// use si_prefix::SiFormatter;
    ///
    /// let formatter = SiFormatter::new("{value:.1f}{prefix}B", "{value:.1f}e{expof10}B").unwrap();
    /// assert_eq!(formatter.format(2_500_000.0), "2.5MB");
    /// assert_eq!(formatter.format(3.0), "3.0B");
    /// ```
    pub fn new(format_str: &str, exp_format_str: &str) -> SiResult<Self> {
        let format = Template::parse(format_str)?;
        check_fields(&format, Field::Prefix)?;
        let exp_format = Template::parse(exp_format_str)?;
        check_fields(&exp_format, Field::Expof10)?;
        Ok(Self { format, exp_format })
    }

    /// Template used when the exponent has a prefix symbol
    pub fn template(&self) -> &Template {
        &self.format
    }

    /// Template used beyond yocto/yotta
    pub fn exp_template(&self) -> &Template {
        &self.exp_format
    }

    /// Render `value` with its SI prefix, falling back to the exponent
    /// template outside the prefix range.
    pub fn format(&self, value: f64) -> String {
        let (mantissa, expof10) = split(value);
        self.format_parts(mantissa, expof10)
    }

    /// Render an already normalized mantissa and exponent
    pub fn format_parts(&self, mantissa: f64, expof10: i32) -> String {
        match prefix(expof10) {
            Ok(symbol) => {
                let mut buf = [0; 4];
                let symbol = symbol.encode_utf8(&mut buf).trim_end();
                self.format.render(mantissa, symbol)
            }
            Err(_) => {
                debug!(mantissa, expof10, "no SI prefix, using exponent format");
                let sign = if expof10 > 0 { "+" } else { "" };
                self.exp_format
                    .render(mantissa, &format!("{sign}{expof10}"))
            }
        }
    }
}

/// Format `value` with the default templates, e.g. `6946.03` as `"6.95 k"`.
///
/// # Examples
/// ```
/// use si_prefix::si_format;
///
/// assert_eq!(si_format(1.764e-24), "1.76 y");
/// assert_eq!(si_format(6946.03), "6.95 k");
/// assert_eq!(si_format(3.93766), "3.94 ");
/// assert_eq!(si_format(1.55051e28), "15.51e+27");
/// ```
pub fn si_format(value: f64) -> String {
    SiFormatter::default().format(value)
}

/// Format `value` with caller-supplied templates.
///
/// Fails only if a template does not compile.
pub fn si_format_with(value: f64, format_str: &str, exp_format_str: &str) -> SiResult<String> {
    Ok(SiFormatter::new(format_str, exp_format_str)?.format(value))
}
