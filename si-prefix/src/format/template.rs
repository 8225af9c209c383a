//! Compiled format templates such as `"{value:.2f} {prefix}"`

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::char,
    combinator::{map, opt},
    error::context,
    multi::many0,
    sequence::{delimited, preceded},
    Parser,
};

use super::spec::{format_spec, FormatSpec};
use crate::error::{SiError, SiResult};
use crate::parser::Res;

/// A named value a template can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The scaled mantissa
    Value,
    /// The prefix symbol, trailing space trimmed
    Prefix,
    /// The exponent of ten, with `+` when positive
    Expof10,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Value => "value",
            Field::Prefix => "prefix",
            Field::Expof10 => "expof10",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        [Field::Value, Field::Prefix, Field::Expof10]
            .into_iter()
            .find(|f| f.name() == name)
    }

    /// Whether the field renders as a number rather than text
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub field: Field,
    pub spec: FormatSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed template, ready to render many values
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

/// Raw pieces before names and specs are validated
enum RawSegment<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, spec: Option<&'a str> },
}

/// `{{` or `}}`, yielding the single brace
fn escaped_brace(input: &str) -> Res<&str, &str> {
    alt((tag("{{"), tag("}}")))
        .parse(input)
        .map(|(next_input, braces)| (next_input, &braces[..1]))
}

fn literal(input: &str) -> Res<&str, RawSegment<'_>> {
    map(alt((escaped_brace, is_not("{}"))), RawSegment::Literal).parse(input)
}

fn placeholder(input: &str) -> Res<&str, RawSegment<'_>> {
    context(
        "placeholder",
        delimited(
            char('{'),
            (
                take_while1(|c: char| c.is_alphanumeric() || c == '_'),
                opt(preceded(char(':'), opt(is_not("}")))),
            ),
            char('}'),
        ),
    )
    .parse(input)
    .map(|(next_input, (name, spec))| {
        (
            next_input,
            RawSegment::Placeholder {
                name,
                spec: spec.flatten(),
            },
        )
    })
}

fn raw_segments(input: &str) -> Res<&str, Vec<RawSegment<'_>>> {
    many0(alt((literal, placeholder))).parse(input)
}

impl Template {
    /// Compile a template string.
    ///
    /// The syntax follows Python's `str.format`, but numbers render the way
    /// Rust's `format!` renders them: a precision without a type means
    /// decimal places (`{value:.1}` turns `3.26` into `"3.3"`), and `e`/`E`
    /// print the shortest exponent (`"1.23e3"`, not `"1.23e+03"`).
    ///
    /// # Examples
    /// ```
    /// use si_prefix::Template;
    ///
    /// let template = Template::parse("{value:.1f}{prefix}Hz").unwrap();
    /// assert_eq!(template.render(2.5, "k"), "2.5kHz");
    /// ```
    pub fn parse(source: &str) -> SiResult<Self> {
        let (remaining, raw) = raw_segments(source)
            .map_err(|e| SiError::invalid_template(source, format!("{e:?}")))?;
        if !remaining.is_empty() {
            let position = source.len() - remaining.len();
            return Err(SiError::invalid_template(
                source,
                format!("unbalanced brace at byte {position}"),
            ));
        }

        let mut segments: Vec<Segment> = Vec::with_capacity(raw.len());
        for piece in raw {
            match piece {
                RawSegment::Literal(text) => match segments.last_mut() {
                    Some(Segment::Literal(prev)) => prev.push_str(text),
                    _ => segments.push(Segment::Literal(text.to_string())),
                },
                RawSegment::Placeholder { name, spec } => {
                    let field = Field::from_name(name).ok_or_else(|| {
                        SiError::invalid_template(source, format!("unknown placeholder '{name}'"))
                    })?;
                    let spec = match spec {
                        Some(text) => {
                            format_spec(text)
                                .map_err(|_| {
                                    SiError::invalid_template(
                                        source,
                                        format!("bad format spec '{text}' for '{name}'"),
                                    )
                                })?
                                .1
                        }
                        None => FormatSpec::default(),
                    };
                    if !field.is_numeric() && spec.is_numeric() {
                        return Err(SiError::invalid_template(
                            source,
                            format!("numeric format spec on text placeholder '{name}'"),
                        ));
                    }
                    segments.push(Segment::Placeholder(Placeholder { field, spec }));
                }
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Build a template from already-validated segments
    pub(crate) fn from_segments(source: &str, segments: Vec<Segment>) -> Self {
        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Fields referenced by the template, in order of appearance
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(p) => Some(p.field),
            Segment::Literal(_) => None,
        })
    }

    /// Render with `value` for `{value}` and `label` for the text field
    /// (`{prefix}` or `{expof10}`).
    pub fn render(&self, value: f64, label: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) if p.field.is_numeric() => {
                    out.push_str(&p.spec.format_number(value))
                }
                Segment::Placeholder(p) => out.push_str(&p.spec.format_str(label)),
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_default_template() {
        let template = Template::parse("{value:.2f} {prefix}").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Placeholder(Placeholder {
                    field: Field::Value,
                    spec: FormatSpec::fixed(2),
                }),
                Segment::Literal(" ".to_string()),
                Segment::Placeholder(Placeholder {
                    field: Field::Prefix,
                    spec: FormatSpec::default(),
                }),
            ]
        );
        assert_eq!(
            template.fields().collect::<Vec<_>>(),
            vec![Field::Value, Field::Prefix]
        );
    }

    #[test]
    fn test_escaped_braces() {
        let template = Template::parse("{{{value:.1f}}} {{raw}}").unwrap();
        assert_eq!(template.render(1.24, ""), "{1.2} {raw}");
        assert_eq!(template.segments().len(), 3);
    }

    #[test]
    fn test_render() {
        let template = Template::parse("{value:.2f}e{expof10}").unwrap();
        assert_eq!(template.render(15.5051, "+27"), "15.51e+27");

        let template = Template::parse("[{prefix:>2}] {value}").unwrap();
        assert_eq!(template.render(6.94603, "k"), "[ k] 6.94603");

        let template = Template::parse("no placeholders").unwrap();
        assert_eq!(template.render(1.0, "k"), "no placeholders");
        assert_eq!(template.fields().count(), 0);
    }

    #[test]
    fn test_rust_number_rendering() {
        let template = Template::parse("{value:.1} {value:.2e}").unwrap();
        assert_eq!(template.render(3.26, ""), "3.3 3.26e0");
    }

    #[test]
    fn test_empty_spec() {
        let template = Template::parse("{value:}").unwrap();
        assert_eq!(template.render(2.5, ""), "2.5");
    }

    #[rstest]
    #[case::unclosed("{value")]
    #[case::stray_close("value}")]
    #[case::stray_open("{ value}")]
    #[case::unknown("{unit}")]
    #[case::bad_spec("{value:.2q}")]
    #[case::numeric_on_text("{prefix:.2f}")]
    #[case::sign_on_text("{expof10:+}")]
    fn test_parse_rejects(#[case] source: &str) {
        let err = Template::parse(source).unwrap_err();
        assert!(
            matches!(err, SiError::InvalidTemplate { ref template, .. } if template == source),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn test_display_is_source() {
        let template = Template::parse("{value:.3f} {prefix}").unwrap();
        assert_eq!(template.to_string(), "{value:.3f} {prefix}");
        assert_eq!(template.source(), "{value:.3f} {prefix}");
    }
}
