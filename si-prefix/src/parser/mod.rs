//! Parsing SI-prefixed and exponential number strings
//!
//! Two independent grammars are tried in order. The exponential grammar
//! (`"15.51e+27"`, `"42"`) goes first so that `e`/`E` is never mistaken for
//! the exa prefix when digits follow it; anything it rejects is retried as a
//! number with an optional trailing prefix (`"1.27 µ"`, `"6.95k"`, `"1E"`).

mod grammar;

pub use grammar::NumberParts;

use nom::IResult;
use nom_language::error::VerboseError;
use tracing::debug;

use crate::error::{SiError, SiResult};
use crate::prefix::si_prefix_expof10;
use crate::trace::{
    disable_tracing, enable_tracing, is_tracing_enabled, trace_enter, trace_exit_failure,
    trace_exit_success, ParseWithTrace,
};

pub(crate) type Res<T, U> = IResult<T, U, VerboseError<T>>;

/// Which grammar accepted the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberMatch<'a> {
    /// Plain or exponential notation, parsed as is
    Exponential(NumberParts<'a>),
    /// Number followed by a prefix symbol; `' '` when there is none
    Prefixed { number: NumberParts<'a>, symbol: char },
}

impl<'a> NumberMatch<'a> {
    pub fn number(&self) -> &NumberParts<'a> {
        match self {
            NumberMatch::Exponential(number) | NumberMatch::Prefixed { number, .. } => number,
        }
    }
}

/// Match `input` against the exponential grammar
pub fn match_exponential(input: &str) -> Option<NumberMatch<'_>> {
    grammar::exponential_number(input)
        .ok()
        .map(|(_, number)| NumberMatch::Exponential(number))
}

/// Match `input` against the SI-prefixed grammar
pub fn match_prefixed(input: &str) -> Option<NumberMatch<'_>> {
    grammar::prefixed_number(input)
        .ok()
        .map(|(_, (number, symbol))| NumberMatch::Prefixed {
            number,
            symbol: symbol.unwrap_or(' '),
        })
}

fn parse_number(input: &str) -> SiResult<f64> {
    let matched = match_exponential(input)
        .or_else(|| match_prefixed(input))
        .ok_or_else(|| SiError::invalid_input(input, "not a number with an optional SI prefix"))?;
    debug!(?matched, "matched number grammar");

    let number = matched.number();
    if !number.has_digits() {
        return Err(SiError::invalid_input(input, "no digits"));
    }
    let shift = match matched {
        NumberMatch::Exponential(_) => 0,
        NumberMatch::Prefixed { symbol, .. } => si_prefix_expof10(symbol)?,
    };

    let text = number.to_decimal_string(shift)?;
    text.parse::<f64>()
        .map_err(|e| SiError::invalid_input(input, e.to_string()))
}

/// Parse a number written with an SI prefix or in exponential notation.
///
/// Accepts everything [`si_format`](crate::si_format) produces with the
/// default templates, plus plain numbers. The prefix is applied as a power
/// of ten before conversion, so no extra rounding is introduced.
///
/// # Examples
/// ```
/// use si_prefix::si_parse;
///
/// assert_eq!(si_parse("6.95k").unwrap(), 6950.0);
/// assert_eq!(si_parse("1.27 µ").unwrap(), 1.27e-6);
/// assert_eq!(si_parse("15.51e+27").unwrap(), 1.551e28);
/// assert!(si_parse("abc").is_err());
/// ```
pub fn si_parse(input: &str) -> SiResult<f64> {
    let tracing = is_tracing_enabled();
    if tracing {
        trace_enter("si_parse", input);
    }
    let result = parse_number(input);
    if let Err(e) = &result {
        debug!(input, error = %e, "rejected input");
    }
    if tracing {
        match &result {
            Ok(value) => trace_exit_success(input.len(), &value.to_string()),
            Err(e) => trace_exit_failure(&e.to_string()),
        }
    }
    result
}

/// Parse like [`si_parse`], recording every grammar tried.
///
/// # Examples
/// ```
/// use si_prefix::si_parse_with_trace;
///
/// let traced = si_parse_with_trace("6.95k");
/// assert_eq!(traced.result.unwrap(), 6950.0);
/// println!("{}", traced.trace.format_tree(false));
/// ```
pub fn si_parse_with_trace(input: &str) -> ParseWithTrace<f64> {
    enable_tracing();
    let result = si_parse(input);
    let trace = disable_tracing(input);
    ParseWithTrace { result, trace }
}
