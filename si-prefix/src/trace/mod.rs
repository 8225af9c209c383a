//! Debug tracing for number parsing
//!
//! Records which grammars and sub-parsers were tried while parsing one
//! input, and how each attempt ended.
//!
//! # Example
//!
//! ```
//! use si_prefix::si_parse_with_trace;
//!
//! let result = si_parse_with_trace("1.27 µ");
//! println!("{}", result.trace.format_tree(true));
//! ```

mod collector;
mod tree;

pub use collector::{disable_tracing, enable_tracing, is_tracing_enabled};
pub use collector::{trace_enter, trace_exit_failure, trace_exit_success};

use std::fmt;

use crate::error::SiResult;
use crate::util::truncate_str;

/// Name of the root node when nothing was recorded
const ROOT_NAME: &str = "si_parse";

/// One grammar attempt and the attempts nested inside it
#[derive(Debug, Clone, PartialEq)]
pub struct TraceNode {
    /// Grammar name, e.g. `prefixed_number`
    pub name: String,
    /// Remaining input when the grammar started, cut to 40 characters
    pub input: String,
    /// Nested grammar attempts, in the order they ran
    pub children: Vec<TraceNode>,
    /// How the attempt ended
    pub outcome: TraceOutcome,
}

impl TraceNode {
    pub fn new(name: impl Into<String>, input: &str) -> Self {
        Self {
            name: name.into(),
            input: truncate_str(input, 40),
            children: Vec::new(),
            outcome: TraceOutcome::Incomplete,
        }
    }

    /// Record a match of `consumed` bytes
    pub fn success(&mut self, consumed: usize, output_preview: impl Into<String>) {
        self.outcome = TraceOutcome::Success {
            consumed,
            output_preview: output_preview.into(),
        };
    }

    /// Record a rejection
    pub fn failure(&mut self, error: impl Into<String>) {
        self.outcome = TraceOutcome::Failure {
            error: error.into(),
        };
    }

    pub fn add_child(&mut self, child: TraceNode) {
        self.children.push(child);
    }

    /// Depth-first search for the first node called `name`
    pub fn find(&self, name: &str) -> Option<&TraceNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}

/// How a grammar attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum TraceOutcome {
    Success {
        /// Bytes of input matched
        consumed: usize,
        /// Matched value rendered as text, e.g. `"6.95 k"`
        output_preview: String,
    },
    Failure {
        error: String,
    },
    /// Still open when the recording stopped
    Incomplete,
}

impl TraceOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TraceOutcome::Success { .. })
    }
}

/// Recorded grammar attempts for one call to `si_parse`
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTrace {
    /// Text handed to the parser, untruncated
    pub input: String,
    /// The outermost attempt
    pub root: TraceNode,
}

impl ParseTrace {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            root: TraceNode::new(ROOT_NAME, input),
        }
    }

    /// Render the attempts as an indented tree, one line per grammar.
    /// `colored` adds ANSI escapes for terminals.
    pub fn format_tree(&self, colored: bool) -> String {
        tree::format_tree(&self.root, colored)
    }
}

impl fmt::Display for ParseTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_tree(false))
    }
}

/// Parsed value together with the recorded attempts
#[derive(Debug, Clone)]
pub struct ParseWithTrace<T> {
    pub result: SiResult<T>,
    pub trace: ParseTrace,
}

/// Run a nom parser expression, recording it as a trace node named
/// `$name` when a recording is in progress. `$format` renders the parsed
/// value for the node; `$error` labels a rejection.
///
/// # Example
/// ```ignore
/// fn exponent(input: &str) -> Res<&str, &str> {
///     traced_parser!(
///         "exponent",
///         input,
///         preceded(one_of("eE"), digit1).parse(input),
///         |exp: &&str| format!("e{exp}"),
///         "no exponent"
///     )
/// }
/// ```
#[macro_export]
macro_rules! traced_parser {
    ($name:expr, $input:expr, $parser:expr, $format:expr, $error:expr) => {{
        use $crate::trace::{
            is_tracing_enabled, trace_enter, trace_exit_failure, trace_exit_success,
        };
        let tracing = is_tracing_enabled();
        if tracing {
            trace_enter($name, $input);
        }
        let result = $parser;
        if tracing {
            match &result {
                Ok((remaining, value)) => {
                    let consumed = $input.len() - remaining.len();
                    trace_exit_success(consumed, &$format(value));
                }
                Err(_) => trace_exit_failure($error),
            }
        }
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_outcomes() {
        let mut node = TraceNode::new("decimal", "6.95k");
        assert_eq!(node.outcome, TraceOutcome::Incomplete);
        node.success(4, "6.95");
        assert!(node.outcome.is_success());
        node.failure("no decimal");
        assert_eq!(
            node.outcome,
            TraceOutcome::Failure {
                error: "no decimal".to_string()
            }
        );
    }

    #[test]
    fn test_find() {
        let mut root = TraceNode::new("si_parse", "1k");
        let mut grammar = TraceNode::new("prefixed_number", "1k");
        grammar.add_child(TraceNode::new("prefix_symbol", "k"));
        root.add_child(grammar);
        assert_eq!(root.find("prefix_symbol").map(|n| n.input.as_str()), Some("k"));
        assert!(root.find("exponent").is_none());
    }

    #[test]
    fn test_long_input_is_truncated() {
        let input = "1".repeat(60);
        let trace = ParseTrace::new(&input);
        assert_eq!(trace.input, input);
        assert_eq!(trace.root.input.chars().count(), 43);
    }
}
