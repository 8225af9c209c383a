//! nom grammars for plain/exponential numbers and SI-prefixed numbers

use std::fmt;

use nom::{
    character::complete::{char, digit1, multispace0, one_of, satisfy},
    combinator::{all_consuming, opt, recognize},
    error::context,
    sequence::{delimited, preceded},
    Parser,
};

use super::Res;
use crate::error::{SiError, SiResult};
use crate::prefix::is_prefix_symbol;
use crate::traced_parser;

/// Sign, integer and fraction digits (and exponent, if any) of a number,
/// borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberParts<'a> {
    pub(crate) negative: bool,
    pub(crate) integer: Option<&'a str>,
    pub(crate) fraction: Option<&'a str>,
    /// Exponent digits with optional sign, e.g. `"+27"`
    pub(crate) exponent: Option<&'a str>,
}

impl<'a> NumberParts<'a> {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer(&self) -> Option<&'a str> {
        self.integer
    }

    pub fn fraction(&self) -> Option<&'a str> {
        self.fraction
    }

    pub fn exponent(&self) -> Option<&'a str> {
        self.exponent
    }

    pub fn has_digits(&self) -> bool {
        self.integer.is_some() || self.fraction.is_some()
    }

    fn push_mantissa(&self, text: &mut String) {
        if self.negative {
            text.push('-');
        }
        text.push_str(self.integer.unwrap_or("0"));
        if let Some(fraction) = self.fraction {
            text.push('.');
            text.push_str(fraction);
        }
    }

    /// Decimal text for the number, with `shift` added to the power of ten.
    ///
    /// A matched exponent is kept verbatim when there is nothing to add, so
    /// exponents too long for an integer still reach the float parser.
    pub(crate) fn to_decimal_string(&self, shift: i32) -> SiResult<String> {
        let mut text = String::new();
        self.push_mantissa(&mut text);
        match (self.exponent, shift) {
            (Some(exponent), 0) => {
                text.push('e');
                text.push_str(exponent);
            }
            (Some(exponent), shift) => {
                let exponent = exponent
                    .parse::<i64>()
                    .map_err(|e| SiError::invalid_input(exponent, e.to_string()))?;
                text.push_str(&format!("e{}", exponent + i64::from(shift)));
            }
            (None, 0) => {}
            (None, shift) => text.push_str(&format!("e{shift}")),
        }
        Ok(text)
    }
}

impl fmt::Display for NumberParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.push_mantissa(&mut text);
        if let Some(exponent) = self.exponent {
            text.push('e');
            text.push_str(exponent);
        }
        f.write_str(&text)
    }
}

fn sign(input: &str) -> Res<&str, bool> {
    opt(one_of("+-"))
        .parse(input)
        .map(|(next_input, sign)| (next_input, sign == Some('-')))
}

/// `[+-]? digits? ('.' digits)?`; matches the empty string too, callers
/// check [`NumberParts::has_digits`].
pub(crate) fn decimal(input: &str) -> Res<&str, NumberParts<'_>> {
    traced_parser!(
        "decimal",
        input,
        context(
            "decimal",
            (sign, opt(digit1), opt(preceded(char('.'), digit1))),
        )
        .parse(input)
        .map(|(next_input, (negative, integer, fraction))| {
            (
                next_input,
                NumberParts {
                    negative,
                    integer,
                    fraction,
                    exponent: None,
                },
            )
        }),
        |parts: &NumberParts| parts.to_string(),
        "no decimal"
    )
}

/// `e` or `E` followed by optionally signed digits
pub(crate) fn exponent(input: &str) -> Res<&str, &str> {
    traced_parser!(
        "exponent",
        input,
        context(
            "exponent",
            preceded(one_of("eE"), recognize((opt(one_of("+-")), digit1))),
        )
        .parse(input),
        |exp: &&str| format!("e{exp}"),
        "no exponent"
    )
}

/// A single SI prefix character other than the blank base-unit slot
pub(crate) fn prefix_symbol(input: &str) -> Res<&str, char> {
    traced_parser!(
        "prefix_symbol",
        input,
        context(
            "prefix_symbol",
            satisfy(|c| c != ' ' && is_prefix_symbol(c)),
        )
        .parse(input),
        |c: &char| c.to_string(),
        "no prefix"
    )
}

/// Whole-input plain or exponential number, e.g. `" -1.5e+27 "`
pub(crate) fn exponential_number(input: &str) -> Res<&str, NumberParts<'_>> {
    traced_parser!(
        "exponential_number",
        input,
        context(
            "exponential_number",
            all_consuming(delimited(
                multispace0,
                (decimal, opt(exponent)),
                multispace0,
            )),
        )
        .parse(input)
        .map(|(next_input, (parts, exponent))| {
            (next_input, NumberParts { exponent, ..parts })
        }),
        |parts: &NumberParts| parts.to_string(),
        "not an exponential number"
    )
}

/// Whole-input number with an optional trailing SI prefix, e.g. `"1.27 µ"`
pub(crate) fn prefixed_number(input: &str) -> Res<&str, (NumberParts<'_>, Option<char>)> {
    traced_parser!(
        "prefixed_number",
        input,
        context(
            "prefixed_number",
            all_consuming(delimited(
                multispace0,
                (decimal, preceded(multispace0, opt(prefix_symbol))),
                multispace0,
            )),
        )
        .parse(input),
        |(parts, symbol): &(NumberParts, Option<char>)| match symbol {
            Some(symbol) => format!("{parts} {symbol}"),
            None => parts.to_string(),
        },
        "not a prefixed number"
    )
}
