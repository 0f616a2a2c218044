//! # treearbo
//!
//! A parser and canonical serializer for the tree format: an indentation-delimited text
//! notation where nesting is inferred from leading tabs rather than from brackets.
//!
//! ## The Format
//!
//! ```text
//! user
//! 	name \Jin
//! 	age 35
//! 	hobby
//! 		\kendo
//! 		\dance
//! 		\role play
//! ```
//!
//! - Each line is indented by one tab per depth level.
//! - Barewords (`user`, `name`, `35`) become struct nodes with a label.
//! - A `\` token takes the rest of the line verbatim, spaces included, and becomes a string
//!   leaf (`\role play` is the value `role play`). Nothing follows it on that line and nothing
//!   can be nested beneath it.
//! - Tokens on one line form a chain: each one is the only child of the token before it, so
//!   `name \Jin` is the struct `name` holding the leaf `Jin`.
//! - A more indented line becomes a child of the innermost node of the line above it.
//!
//! There are no comments, and no escapes inside values: a backslash after the first one is
//! plain text. Multi-line text is stored as one leaf per line, see [`Node::text_block`].
//!
//! ## Quick Start
//!
//! ```rust
//! use treearbo::{string_to_tree, tree_to_string, Node};
//!
//! let text = "user\n\tname \\Jin\n\tage 35\n";
//! let forest = string_to_tree(text).unwrap();
//!
//! assert_eq!(
//!     forest,
//!     vec![Node::structure(
//!         "user",
//!         vec![
//!             Node::structure("name", vec![Node::leaf("Jin")]),
//!             Node::structure("age", vec![Node::structure("35", vec![])]),
//!         ],
//!     )]
//! );
//!
//! // Canonical text comes back byte for byte
//! assert_eq!(tree_to_string(&forest).unwrap(), text);
//! ```
//!
//! ## Guarantees
//!
//! - **Round trip**: `string_to_tree(&tree_to_string(&f)?)? == f` for every parsed forest `f`
//! - **Canonical output**: text with single-space separators, one tab per level and a line feed
//!   after every line is reproduced exactly
//! - **All or nothing**: a malformed document fails as a whole, with the offending line in the
//!   error
//! - **No global state**: every call owns its buffers, so parsing on many threads at once is safe
//! - **No recursion while parsing**: nesting is tracked with an explicit stack

pub mod builder;
pub mod error;
pub mod lexer;
pub mod node;
pub mod options;
pub mod ser;

pub use builder::Builder;
pub use error::{Error, Result};
pub use node::{Forest, Node, Span, StringLeaf, StructNode};
pub use options::ParseOptions;
pub use ser::Serializer;

/// Parses tree text into a [`Forest`] with default [`ParseOptions`].
///
/// # Examples
///
/// ```rust
/// use treearbo::string_to_tree;
///
/// let forest = string_to_tree("first\nsecond \\2nd\n").unwrap();
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[1].children()[0].value(), Some("2nd"));
///
/// assert!(string_to_tree("").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// - [`Error::Indentation`] for non-tab indentation or a line nested too deep
/// - [`Error::UnterminatedChain`] for a line nested beneath a string leaf
/// - [`Error::Separator`] for tokens not separated by exactly one space
/// - [`Error::UnexpectedEof`] if the last line has no line feed
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn string_to_tree(text: &str) -> Result<Forest> {
    string_to_tree_with_options(text, &ParseOptions::default())
}

/// Parses tree text into a [`Forest`] with custom options.
///
/// # Examples
///
/// ```rust
/// use treearbo::{string_to_tree_with_options, Error, ParseOptions};
///
/// let options = ParseOptions::new().with_uri("users.tree");
/// let err = string_to_tree_with_options("user\n\t\tname\n", &options).unwrap_err();
/// assert!(err.to_string().contains("users.tree#2:3"));
/// assert_eq!(err.line(), Some(2));
/// ```
///
/// # Errors
///
/// Same as [`string_to_tree`]; messages name `options.uri`.
#[must_use = "this returns the result of the operation, errors must be handled"]
#[tracing::instrument(skip_all, fields(uri = %options.uri, len = text.len()))]
pub fn string_to_tree_with_options(text: &str, options: &ParseOptions) -> Result<Forest> {
    Builder::build(text, options)
}

/// Renders a [`Forest`] as canonical tree text.
///
/// # Examples
///
/// ```rust
/// use treearbo::{tree_to_string, Node};
///
/// let forest = vec![
///     Node::structure("hobby", vec![Node::leaf("kendo"), Node::leaf("role play")]),
///     Node::structure("done", vec![]),
/// ];
/// assert_eq!(
///     tree_to_string(&forest).unwrap(),
///     "hobby\n\t\\kendo\n\t\\role play\ndone\n"
/// );
/// assert_eq!(tree_to_string(&[]).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedTree`] if the forest could not have come from a document: an empty
/// label, a label containing whitespace or `\`, or a leaf value containing a line feed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn tree_to_string(forest: &[Node]) -> Result<String> {
    let mut serializer = Serializer::new();
    for node in forest {
        serializer.serialize_node(node, 0)?;
    }
    let output = serializer.into_inner();
    tracing::trace!(roots = forest.len(), bytes = output.len(), "serialized tree");
    Ok(output)
}
