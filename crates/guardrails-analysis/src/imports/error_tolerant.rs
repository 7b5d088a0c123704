//! Error-tolerant parsing: locate damage in trees with ERROR nodes.

use tree_sitter::Node;

/// 1-based line of the first ERROR or MISSING node in document order.
pub fn first_error_line(root: Node) -> Option<u32> {
    if !root.has_error() {
        return None;
    }
    let mut stack = vec![root];
    let mut first: Option<usize> = None;
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let row = node.start_position().row;
            first = Some(first.map_or(row, |f| f.min(row)));
            continue;
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
    first.map(|row| row as u32 + 1)
}
