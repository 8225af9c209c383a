//! Format specs inside template placeholders, e.g. the `.2f` in `{value:.2f}`

use nom::{
    branch::alt,
    character::complete::{anychar, char, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt},
    error::context,
    sequence::preceded,
    Parser,
};

use crate::parser::Res;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Only negative numbers carry a sign
    #[default]
    Minus,
    /// Always print a sign
    Plus,
    /// Leading space for non-negative numbers
    Space,
}

/// Presentation type of a numeric placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberKind {
    /// Shortest round-trip form, or fixed point when a precision is given
    #[default]
    General,
    /// `f` / `F`: fixed point, six decimals unless a precision is given
    Fixed,
    /// `e`: scientific with lowercase exponent marker
    Exp,
    /// `E`: scientific with uppercase exponent marker
    ExpUpper,
}

/// Parsed `[[fill]align][sign][0][width][.precision][type]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatSpec {
    pub fill: Option<char>,
    pub align: Option<Align>,
    pub sign: Sign,
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    /// `None` when no type character is given
    pub kind: Option<NumberKind>,
}

fn align(input: &str) -> Res<&str, Align> {
    map(one_of("<>^"), |c| match c {
        '<' => Align::Left,
        '^' => Align::Center,
        _ => Align::Right,
    })
    .parse(input)
}

fn fill_align(input: &str) -> Res<&str, (Option<char>, Align)> {
    alt((
        map((anychar, align), |(fill, a)| (Some(fill), a)),
        map(align, |a| (None, a)),
    ))
    .parse(input)
}

fn sign(input: &str) -> Res<&str, Sign> {
    map(one_of("+- "), |c| match c {
        '+' => Sign::Plus,
        ' ' => Sign::Space,
        _ => Sign::Minus,
    })
    .parse(input)
}

fn count(input: &str) -> Res<&str, usize> {
    map_res(digit1, str::parse::<usize>).parse(input)
}

fn kind(input: &str) -> Res<&str, NumberKind> {
    map(one_of("fFeE"), |c| match c {
        'e' => NumberKind::Exp,
        'E' => NumberKind::ExpUpper,
        _ => NumberKind::Fixed,
    })
    .parse(input)
}

/// Parse the text after `:` in a placeholder
pub(crate) fn format_spec(input: &str) -> Res<&str, FormatSpec> {
    context(
        "format_spec",
        all_consuming((
            opt(fill_align),
            opt(sign),
            opt(char('0')),
            opt(count),
            opt(preceded(char('.'), count)),
            opt(kind),
        )),
    )
    .parse(input)
    .map(|(next_input, (fill_align, sign, zero, width, precision, kind))| {
        let (fill, align) = match fill_align {
            Some((fill, align)) => (fill, Some(align)),
            None => (None, None),
        };
        (
            next_input,
            FormatSpec {
                fill,
                align,
                sign: sign.unwrap_or_default(),
                zero_pad: zero.is_some(),
                width,
                precision,
                kind,
            },
        )
    })
}

impl FormatSpec {
    /// Spec with only a fixed-point precision, as in `{value:.2f}`
    pub fn fixed(precision: usize) -> Self {
        Self {
            precision: Some(precision),
            kind: Some(NumberKind::Fixed),
            ..Self::default()
        }
    }

    /// Whether this spec only makes sense for numbers
    pub(crate) fn is_numeric(&self) -> bool {
        self.kind.is_some() || self.sign != Sign::Minus || self.zero_pad
    }

    pub(crate) fn format_number(&self, value: f64) -> String {
        let abs = value.abs();
        let body = match (self.kind.unwrap_or_default(), self.precision) {
            (NumberKind::General, None) => format!("{abs}"),
            (NumberKind::General | NumberKind::Fixed, Some(p)) => format!("{abs:.p$}"),
            (NumberKind::Fixed, None) => format!("{abs:.6}"),
            (NumberKind::Exp, None) => format!("{abs:e}"),
            (NumberKind::Exp, Some(p)) => format!("{abs:.p$e}"),
            (NumberKind::ExpUpper, None) => format!("{abs:E}"),
            (NumberKind::ExpUpper, Some(p)) => format!("{abs:.p$E}"),
        };
        let sign = if value.is_sign_negative() && !value.is_nan() {
            "-"
        } else {
            match self.sign {
                Sign::Plus => "+",
                Sign::Space => " ",
                Sign::Minus => "",
            }
        };

        if self.zero_pad && self.align.is_none() {
            let len = sign.chars().count() + body.chars().count();
            let zeros = self.width.unwrap_or(0).saturating_sub(len);
            return format!("{sign}{}{body}", "0".repeat(zeros));
        }
        self.pad(format!("{sign}{body}"), Align::Right)
    }

    pub(crate) fn format_str(&self, text: &str) -> String {
        let text = match self.precision {
            Some(p) => text.chars().take(p).collect(),
            None => text.to_string(),
        };
        self.pad(text, Align::Left)
    }

    fn pad(&self, text: String, default_align: Align) -> String {
        let len = text.chars().count();
        let Some(width) = self.width.filter(|&w| w > len) else {
            return text;
        };
        let fill = self.fill.unwrap_or(' ');
        let total = width - len;
        let (left, right) = match self.align.unwrap_or(default_align) {
            Align::Left => (0, total),
            Align::Right => (total, 0),
            Align::Center => (total / 2, total - total / 2),
        };
        let mut out = String::with_capacity(text.len() + total * fill.len_utf8());
        out.extend(std::iter::repeat(fill).take(left));
        out.push_str(&text);
        out.extend(std::iter::repeat(fill).take(right));
        out
    }
}
