//! # SI Prefix
//!
//! Convert numbers to and from strings using SI metric prefixes, e.g.
//! `1234.5` ↔ `"1.23 k"`.
//!
//! ## Features
//!
//! - Normalize a value into a mantissa in `[1, 1000)` and an exponent that is
//!   a multiple of 3
//! - Look up prefix symbols (`y` through `Y`, `µ` for micro) in both directions
//! - Render with configurable templates, falling back to thousands-grouped
//!   exponential notation beyond yocto/yotta
//! - Parse prefixed (`"6.95k"`) and exponential (`"15.51e+27"`) strings back
//!   into numbers, with optional parse tracing for debugging
//!
//! ## Quick Start
//!
//! ```
//! use si_prefix::{si_format, si_parse, split};
//!
//! assert_eq!(split(4781.123), (4.781123, 3));
//! assert_eq!(si_format(6946.03), "6.95 k");
//! assert_eq!(si_parse("6.95k").unwrap(), 6950.0);
//! ```
//!
//! ## Custom Templates
//!
//! ```
//! use si_prefix::SiFormatter;
//!
//! let formatter = SiFormatter::new("{value:.1f} {prefix}Hz", "{value:.1f}e{expof10} Hz").unwrap();
//! assert_eq!(formatter.format(2.4e9), "2.4 GHz");
//! assert_eq!(formatter.format(3e30), "3.0e+30 Hz");
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use si_prefix::{prefix, si_parse, SiError};
//!
//! assert_eq!(prefix(27), Err(SiError::ExponentOutOfRange { expof10: 27 }));
//! match si_parse("twelve") {
//!     Ok(v) => println!("Parsed: {v}"),
//!     Err(e) => eprintln!("Parse error: {e}"),
//! }
//! ```

pub use crate::error::{SiError, SiResult};
pub use crate::format::{
    si_format, si_format_with, SiFormatter, Template, DEFAULT_EXP_FORMAT, DEFAULT_FORMAT,
};
pub use crate::parser::{si_parse, si_parse_with_trace};
pub use crate::prefix::{
    is_prefix_symbol, prefix, si_prefix_expof10, si_prefix_scale, PREFIX_LEVELS, SI_PREFIX_UNITS,
};
pub use crate::split::split;
pub use crate::value::SiValue;

pub mod error;
pub mod format;
pub mod parser;
pub mod prefix;
mod split;
pub mod trace;
pub mod util;
mod value;
