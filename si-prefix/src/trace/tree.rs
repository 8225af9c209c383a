//! Tree formatting for parse traces

use super::{TraceNode, TraceOutcome};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Format a trace node as a tree string for display
pub(super) fn format_tree(node: &TraceNode, colored: bool) -> String {
    let mut output = String::new();
    format_node(node, &mut output, "", true, colored);
    output
}

fn paint(text: &str, color: &str, colored: bool) -> String {
    if colored {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn format_node(node: &TraceNode, output: &mut String, prefix: &str, is_last: bool, colored: bool) {
    let connector = if is_last { "└─ " } else { "├─ " };

    let outcome = match &node.outcome {
        TraceOutcome::Success { output_preview, .. } => {
            format!("{} → {output_preview}", paint("✓", GREEN, colored))
        }
        TraceOutcome::Failure { error } => format!("{} {error}", paint("✗", RED, colored)),
        TraceOutcome::Incomplete => "...".to_string(),
    };

    output.push_str(&format!(
        "{prefix}{connector}{} \"{}\" {outcome}\n",
        paint(&node.name, BOLD, colored),
        node.input
    ));

    let child_prefix = if is_last {
        format!("{prefix}   ")
    } else {
        format!("{prefix}│  ")
    };

    let child_count = node.children.len();
    for (idx, child) in node.children.iter().enumerate() {
        format_node(child, output, &child_prefix, idx == child_count - 1, colored);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TraceNode {
        let mut root = TraceNode::new("si_parse", "1k");
        let mut exponential = TraceNode::new("exponential_number", "1k");
        exponential.failure("not an exponential number");
        let mut prefixed = TraceNode::new("prefixed_number", "1k");
        prefixed.success(2, "1 k");
        root.add_child(exponential);
        root.add_child(prefixed);
        root.success(2, "1000");
        root
    }

    #[test]
    fn test_format_tree_plain() {
        let expected = "\
└─ si_parse \"1k\" ✓ → 1000
   ├─ exponential_number \"1k\" ✗ not an exponential number
   └─ prefixed_number \"1k\" ✓ → 1 k
";
        assert_eq!(format_tree(&sample(), false), expected);
    }

    #[test]
    fn test_format_tree_colored() {
        let tree = format_tree(&sample(), true);
        assert!(tree.contains("\x1b[1msi_parse\x1b[0m"));
        assert!(tree.contains("\x1b[32m✓\x1b[0m → 1000"));
        assert!(tree.contains("\x1b[31m✗\x1b[0m"));
    }

    #[test]
    fn test_format_incomplete() {
        let node = TraceNode::new("decimal", "");
        assert_eq!(format_tree(&node, false), "└─ decimal \"\" ...\n");
    }
}
