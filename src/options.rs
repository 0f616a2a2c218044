//! Configuration options for tree parsing.
//!
//! The serializer has no knobs: a forest has exactly one canonical rendering. Parsing can be
//! tuned through [`ParseOptions`]:
//!
//! - the document URI reported in error messages
//! - whether the last line must be terminated by a line feed
//!
//! ## Examples
//!
//! ```rust
//! use treearbo::{string_to_tree_with_options, ParseOptions};
//!
//! let options = ParseOptions::lenient().with_uri("inline.tree");
//! let forest = string_to_tree_with_options("name \\Jin", &options).unwrap();
//! assert_eq!(forest.len(), 1);
//! ```

use crate::error::UNKNOWN_URI;

/// Configuration options for [`string_to_tree_with_options`](crate::string_to_tree_with_options).
///
/// # Examples
///
/// ```rust
/// use treearbo::ParseOptions;
///
/// // Default: every line, the last one included, ends with a line feed
/// let options = ParseOptions::new();
/// assert!(options.require_final_newline);
///
/// // Accept text whose last line has no line feed
/// let options = ParseOptions::lenient();
/// assert!(!options.require_final_newline);
///
/// // Name the document in error messages
/// let options = ParseOptions::new().with_uri("users.tree");
/// assert_eq!(options.uri, "users.tree");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub uri: String,
    pub require_final_newline: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            uri: UNKNOWN_URI.to_string(),
            require_final_newline: true,
        }
    }
}

impl ParseOptions {
    /// Creates default options (unknown URI, final line feed required).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`ParseOptions::new`]; spelled out for call sites that want to be explicit.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Creates options that accept a last line without a line feed.
    #[must_use]
    pub fn lenient() -> Self {
        ParseOptions {
            require_final_newline: false,
            ..Default::default()
        }
    }

    /// Sets the URI used to name the document in error messages.
    #[must_use]
    pub fn with_uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = uri.into();
        self
    }

    /// Sets whether the last line must be terminated by a line feed.
    #[must_use]
    pub fn with_final_newline(mut self, required: bool) -> Self {
        self.require_final_newline = required;
        self
    }
}
