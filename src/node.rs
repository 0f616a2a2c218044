//! The tree model produced by the parser and consumed by the serializer.
//!
//! A document is a [`Forest`]: an ordered list of root [`Node`]s. A node is either
//!
//! - a [`StructNode`]: a bareword `label` owning an ordered list of children, or
//! - a [`StringLeaf`]: a literal `value` introduced by a `\` token.
//!
//! Each node is exclusively owned by its parent (or by the forest), so the structure is
//! acyclic and needs no reference counting.
//!
//! ## Creating Nodes
//!
//! ```rust
//! use treearbo::Node;
//!
//! let name = Node::structure("name", vec![Node::leaf("Jin")]);
//! assert!(name.is_struct());
//! assert_eq!(name.label(), Some("name"));
//! assert_eq!(name.children()[0].value(), Some("Jin"));
//! ```
//!
//! ## Equality
//!
//! Equality is structural: same kind, same label or value, children pairwise equal in order.
//! Source [`Span`]s are ignored.
//!
//! ```rust
//! use treearbo::{string_to_tree, Node};
//!
//! let parsed = string_to_tree("age 35\n").unwrap();
//! let built = vec![Node::structure("age", vec![Node::structure("35", vec![])])];
//! assert_eq!(parsed, built);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ordered root nodes of one document.
pub type Forest = Vec<Node>;

/// Location of a node's token in the source text.
///
/// `line` and `col` are 1-based and counted in characters; `len` is the token length in
/// characters. For a string leaf the span covers the value, not the `\` marker. Nodes built by
/// hand carry `Span::default()`, which is all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub line: usize,
    pub col: usize,
    pub len: usize,
}

impl Span {
    #[must_use]
    pub const fn new(line: usize, col: usize, len: usize) -> Self {
        Span { line, col, len }
    }

    /// Returns `true` if this span was not recorded by the parser.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.line, self.col, self.len)
    }
}

/// A node of the tree: either a labeled structure or a string leaf.
///
/// # Examples
///
/// ```rust
/// use treearbo::Node;
///
/// let hobby = Node::structure("hobby", vec![Node::leaf("kendo"), Node::leaf("dance")]);
/// assert_eq!(hobby.children().len(), 2);
/// assert_eq!(hobby.to_string(), "hobby");
/// assert_eq!(hobby.children()[1].to_string(), "\\dance");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Struct(StructNode),
    Leaf(StringLeaf),
}

/// A labeled node owning an ordered, possibly empty, list of children.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructNode {
    pub label: String,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(skip)]
    pub span: Span,
}

/// A terminal node holding literal text. The value never contains a line feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StringLeaf {
    pub value: String,
    #[serde(skip)]
    pub span: Span,
}

impl StructNode {
    pub fn new<S: Into<String>>(label: S, children: Vec<Node>) -> Self {
        StructNode {
            label: label.into(),
            children,
            span: Span::default(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Joins the values of the direct leaf children with line feeds, skipping struct children.
    ///
    /// This is the reading side of the multi-line text convention, see [`Node::text_block`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treearbo::string_to_tree;
    ///
    /// let forest = string_to_tree("poem\n\t\\roses are red\n\t\\violets are blue\n").unwrap();
    /// let poem = forest[0].as_struct().unwrap();
    /// assert_eq!(poem.text(), "roses are red\nviolets are blue");
    /// ```
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(Node::value)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StringLeaf {
    pub fn new<S: Into<String>>(value: S) -> Self {
        StringLeaf {
            value: value.into(),
            span: Span::default(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

// Spans are metadata and stay out of equality.
impl PartialEq for StructNode {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.children == other.children
    }
}

impl Eq for StructNode {}

impl PartialEq for StringLeaf {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for StringLeaf {}

// Long chains nest one level per token; dropping them recursively would overflow the stack.
impl Drop for StructNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Struct(mut child) = node {
                pending.append(&mut child.children);
            }
        }
    }
}

impl Node {
    /// Creates a struct node with the given label and children.
    pub fn structure<S: Into<String>>(label: S, children: Vec<Node>) -> Self {
        Node::Struct(StructNode::new(label, children))
    }

    /// Creates a string leaf.
    pub fn leaf<S: Into<String>>(value: S) -> Self {
        Node::Leaf(StringLeaf::new(value))
    }

    /// Creates a struct node holding `text` as one string leaf per line.
    ///
    /// String leaves cannot contain line feeds, so multi-line text is stored as consecutive
    /// leaf lines under a label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treearbo::{tree_to_string, Node};
    ///
    /// let note = Node::text_block("note", "first line\nsecond line");
    /// assert_eq!(
    ///     tree_to_string(&[note]).unwrap(),
    ///     "note\n\t\\first line\n\t\\second line\n"
    /// );
    /// ```
    pub fn text_block<S: Into<String>>(label: S, text: &str) -> Self {
        let lines = text.split('\n').map(Node::leaf).collect();
        Node::structure(label, lines)
    }

    #[inline]
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Node::Struct(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns the label of a struct node.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Struct(node) => Some(&node.label),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the value of a string leaf.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Struct(_) => None,
            Node::Leaf(leaf) => Some(&leaf.value),
        }
    }

    /// Returns the ordered children. A leaf has none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Struct(node) => &node.children,
            Node::Leaf(_) => &[],
        }
    }

    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Node::Struct(node) => node.span,
            Node::Leaf(leaf) => leaf.span,
        }
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&StructNode> {
        match self {
            Node::Struct(node) => Some(node),
            Node::Leaf(_) => None,
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&StringLeaf> {
        match self {
            Node::Struct(_) => None,
            Node::Leaf(leaf) => Some(leaf),
        }
    }
}

impl From<StructNode> for Node {
    fn from(node: StructNode) -> Self {
        Node::Struct(node)
    }
}

impl From<StringLeaf> for Node {
    fn from(leaf: StringLeaf) -> Self {
        Node::Leaf(leaf)
    }
}

/// Renders the node header: the label, or `\` followed by the value.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Struct(node) => f.write_str(&node.label),
            Node::Leaf(leaf) => write!(f, "\\{}", leaf.value),
        }
    }
}
