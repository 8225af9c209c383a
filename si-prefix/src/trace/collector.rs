//! Per-thread recording of grammar attempts
//!
//! `si_parse_with_trace` installs a collector for the duration of one parse.
//! Every `traced_parser!` call pushes a node on entry and folds it into its
//! parent on exit; the outermost node becomes the root of the trace.

use super::{ParseTrace, TraceNode};
use std::cell::RefCell;

/// Nodes of the attempts still in progress, outermost first
#[derive(Debug, Default)]
pub(crate) struct TraceCollector {
    open: Vec<TraceNode>,
}

impl TraceCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn enter(&mut self, name: &str, input: &str) {
        self.open.push(TraceNode::new(name, input));
    }

    pub(crate) fn exit_success(&mut self, consumed: usize, output_preview: &str) {
        self.close(|node| node.success(consumed, output_preview));
    }

    pub(crate) fn exit_failure(&mut self, error: &str) {
        self.close(|node| node.failure(error));
    }

    /// Settle the innermost open node and hand it to the enclosing one.
    /// With nothing enclosing it, it stays on the stack as the root.
    fn close(&mut self, settle: impl FnOnce(&mut TraceNode)) {
        let Some(mut node) = self.open.pop() else {
            return;
        };
        settle(&mut node);
        match self.open.last_mut() {
            Some(parent) => parent.add_child(node),
            None => self.open.push(node),
        }
    }

    pub(crate) fn finish(mut self, input: &str) -> ParseTrace {
        match self.open.pop() {
            Some(root) => ParseTrace {
                input: input.to_string(),
                root,
            },
            None => ParseTrace::new(input),
        }
    }
}

thread_local! {
    static TRACE_COLLECTOR: RefCell<Option<TraceCollector>> = const { RefCell::new(None) };
}

/// Run `f` against this thread's collector, if one is installed
fn with_collector(f: impl FnOnce(&mut TraceCollector)) {
    TRACE_COLLECTOR.with(|tc| {
        if let Some(collector) = tc.borrow_mut().as_mut() {
            f(collector);
        }
    });
}

/// Start recording grammar attempts on this thread, dropping any earlier
/// unfinished recording
pub fn enable_tracing() {
    TRACE_COLLECTOR.with(|tc| *tc.borrow_mut() = Some(TraceCollector::new()));
}

/// Stop recording and return what was recorded for `input`
pub fn disable_tracing(input: &str) -> ParseTrace {
    TRACE_COLLECTOR
        .with(|tc| tc.borrow_mut().take())
        .map_or_else(|| ParseTrace::new(input), |c| c.finish(input))
}

/// Open a node for the grammar `name` starting at `input`
pub fn trace_enter(name: &str, input: &str) {
    with_collector(|c| c.enter(name, input));
}

/// Close the innermost node as a match of `consumed` bytes
pub fn trace_exit_success(consumed: usize, output_preview: &str) {
    with_collector(|c| c.exit_success(consumed, output_preview));
}

/// Close the innermost node as a rejection
pub fn trace_exit_failure(error: &str) {
    with_collector(|c| c.exit_failure(error));
}

/// Whether a recording is in progress; grammars skip building previews
/// when it is not
pub fn is_tracing_enabled() -> bool {
    TRACE_COLLECTOR.with(|tc| tc.borrow().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::TraceOutcome;

    #[test]
    fn test_trace_collector_nested() {
        let mut collector = TraceCollector::new();
        collector.enter("exponential_number", "6.95k");
        collector.enter("decimal", "6.95k");
        collector.exit_success(4, "6.95");
        collector.exit_failure("not an exponential number");

        let trace = collector.finish("6.95k");
        assert_eq!(trace.root.name, "exponential_number");
        assert_eq!(trace.root.children.len(), 1);
        assert_eq!(trace.root.children[0].name, "decimal");
        assert!(trace.root.children[0].outcome.is_success());
        assert!(matches!(trace.root.outcome, TraceOutcome::Failure { .. }));
    }

    #[test]
    fn test_trace_collector_empty_finish() {
        let trace = TraceCollector::new().finish("input");
        assert_eq!(trace.root.name, "si_parse");
        assert!(trace.root.children.is_empty());
    }

    #[test]
    fn test_thread_local_lifecycle() {
        assert!(!is_tracing_enabled());
        trace_enter("ignored", "x");

        enable_tracing();
        assert!(is_tracing_enabled());
        trace_enter("outer", "1k");
        trace_exit_success(2, "1000");
        let trace = disable_tracing("1k");

        assert!(!is_tracing_enabled());
        assert_eq!(trace.root.name, "outer");
        assert_eq!(disable_tracing("1k").root.name, "si_parse");
    }
}
