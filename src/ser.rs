//! Canonical serialization of a [`Forest`](crate::Forest).
//!
//! The serializer is the exact inverse of the parser: one space between the tokens of a line,
//! one tab per depth level, one line feed after every line. Because those choices are fixed,
//! every forest has exactly one rendering.
//!
//! ## Chains and Blocks
//!
//! - A struct node with exactly one child continues on the same line with that child.
//! - A struct node with no children, or a leaf, ends the line.
//! - A struct node with two or more children ends the line and renders each child as an
//!   indented block.
//!
//! ```rust
//! use treearbo::{tree_to_string, Node};
//!
//! let user = Node::structure(
//!     "user",
//!     vec![
//!         Node::structure("name", vec![Node::leaf("Jin")]),
//!         Node::structure("age", vec![Node::structure("35", vec![])]),
//!     ],
//! );
//!
//! assert_eq!(tree_to_string(&[user]).unwrap(), "user\n\tname \\Jin\n\tage 35\n");
//! ```

use crate::error::{Error, Result};
use crate::lexer::{DATA_MARKER, INDENT, SEPARATOR};
use crate::node::{Node, StringLeaf, StructNode};

/// The tree serializer.
///
/// Most users should call [`tree_to_string`](crate::tree_to_string).
pub struct Serializer {
    output: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders `node` as a block starting at `depth`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTree`] if a label or value cannot be written back as a token.
    pub fn serialize_node(&mut self, node: &Node, depth: usize) -> Result<()> {
        for _ in 0..depth {
            self.output.push(INDENT);
        }

        // Single-child chains stay on this line; only blocks recurse.
        let mut current = node;
        loop {
            match current {
                Node::Leaf(leaf) => {
                    self.write_leaf(leaf)?;
                    self.output.push('\n');
                    return Ok(());
                }
                Node::Struct(structure) => {
                    self.write_label(structure)?;
                    if let [only] = structure.children.as_slice() {
                        self.output.push(SEPARATOR);
                        current = only;
                        continue;
                    }

                    self.output.push('\n');
                    for child in &structure.children {
                        self.serialize_node(child, depth + 1)?;
                    }
                    return Ok(());
                }
            }
        }
    }

    fn write_label(&mut self, node: &StructNode) -> Result<()> {
        if node.label.is_empty() {
            return Err(Error::malformed_tree("struct node with an empty label"));
        }
        if node
            .label
            .contains(|ch: char| ch.is_whitespace() || ch == DATA_MARKER)
        {
            return Err(Error::malformed_tree(format!(
                "label {:?} contains whitespace or '{}'",
                node.label, DATA_MARKER
            )));
        }
        self.output.push_str(&node.label);
        Ok(())
    }

    fn write_leaf(&mut self, leaf: &StringLeaf) -> Result<()> {
        if leaf.value.contains('\n') {
            return Err(Error::malformed_tree(format!(
                "string leaf {:?} contains a line feed; use Node::text_block for multi-line text",
                leaf.value
            )));
        }
        self.output.push(DATA_MARKER);
        self.output.push_str(&leaf.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(forest: &[Node]) -> Result<String> {
        let mut serializer = Serializer::new();
        for node in forest {
            serializer.serialize_node(node, 0)?;
        }
        Ok(serializer.into_inner())
    }

    fn s(label: &str, children: Vec<Node>) -> Node {
        Node::structure(label, children)
    }

    fn l(value: &str) -> Node {
        Node::leaf(value)
    }

    #[test]
    fn test_empty_forest() {
        assert_eq!(render(&[]).unwrap(), "");
    }

    #[test]
    fn test_childless_struct() {
        assert_eq!(render(&[s("user", vec![])]).unwrap(), "user\n");
    }

    #[test]
    fn test_chain_stays_inline() {
        let forest = [s("a", vec![s("b", vec![s("c", vec![l("d e")])])])];
        assert_eq!(render(&forest).unwrap(), "a b c \\d e\n");
    }

    #[test]
    fn test_chain_breaks_into_block() {
        let forest = [s("a", vec![s("b", vec![s("c", vec![]), l("d")])])];
        assert_eq!(render(&forest).unwrap(), "a b\n\tc\n\t\\d\n");
    }

    #[test]
    fn test_nested_blocks() {
        let forest = [s(
            "root",
            vec![
                s("left", vec![s("x", vec![]), s("y", vec![])]),
                s("right", vec![]),
            ],
        )];
        assert_eq!(
            render(&forest).unwrap(),
            "root\n\tleft\n\t\tx\n\t\ty\n\tright\n"
        );
    }

    #[test]
    fn test_multiple_roots() {
        let forest = [s("a", vec![]), l("b"), s("c", vec![l("d")])];
        assert_eq!(render(&forest).unwrap(), "a\n\\b\nc \\d\n");
    }

    #[test]
    fn test_empty_leaf_value() {
        assert_eq!(render(&[s("blank", vec![l("")])]).unwrap(), "blank \\\n");
    }

    #[test]
    fn test_backslash_in_value_is_verbatim() {
        assert_eq!(render(&[l("C:\\temp \\x")]).unwrap(), "\\C:\\temp \\x\n");
    }

    #[test]
    fn test_empty_label_fails() {
        let err = render(&[s("", vec![])]).unwrap_err();
        assert!(matches!(err, Error::MalformedTree(_)));
    }

    #[test]
    fn test_label_with_space_fails() {
        let err = render(&[s("two words", vec![])]).unwrap_err();
        assert!(matches!(err, Error::MalformedTree(_)));
    }

    #[test]
    fn test_label_with_marker_fails() {
        let err = render(&[s("a\\b", vec![])]).unwrap_err();
        assert!(matches!(err, Error::MalformedTree(_)));
    }

    #[test]
    fn test_leaf_with_line_feed_fails() {
        let err = render(&[s("note", vec![l("one\ntwo")])]).unwrap_err();
        assert!(err.to_string().contains("text_block"));
    }
}
