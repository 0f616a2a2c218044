//! Error types for tree parsing and serialization.
//!
//! Parse errors abort the whole document: there is no partial result. Every parse error
//! records the document URI, the 1-based line and column of the problem and the offending
//! line as context, so messages read like:
//!
//! ```text
//! Indentation error at config.tree#3:1: expected at most 1 tab(s), found 2
//! 		deep
//! ```
//!
//! ## Error Categories
//!
//! - **Indentation**: non-tab indentation or an illegal depth jump
//! - **Unterminated chains**: a line nested beneath a string leaf
//! - **Separators**: tokens not separated by exactly one space
//! - **End of input**: the last line is missing its line feed
//! - **Malformed trees**: the serializer was handed a tree it cannot render
//!
//! ## Examples
//!
//! ```rust
//! use treearbo::{string_to_tree, Error};
//!
//! let result = string_to_tree("user\n\t\tname\n");
//! assert!(matches!(result, Err(Error::Indentation { line: 2, .. })));
//! ```

use thiserror::Error;

/// URI used when the caller did not name the document.
pub const UNKNOWN_URI: &str = "?";

/// Represents all possible errors that can occur while converting between text and trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Indentation is not made of tabs, or a line is nested deeper than its parent allows
    #[error("Indentation error at {uri}#{line}:{col}: {msg}\n{context}")]
    Indentation {
        uri: String,
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// A line tries to open children beneath a string leaf
    #[error("Unterminated chain at {uri}#{line}:{col}: a string leaf cannot have children\n{context}")]
    UnterminatedChain {
        uri: String,
        line: usize,
        col: usize,
        context: String,
    },

    /// Tokens separated by something other than a single space
    #[error("Wrong nodes separator at {uri}#{line}:{col}: tokens are separated by a single space\n{context}")]
    Separator {
        uri: String,
        line: usize,
        col: usize,
        context: String,
    },

    /// The last line of the document is not terminated by a line feed
    #[error("Unexpected end of input at {uri}#{line}:{col}: line feed required\n{context}")]
    UnexpectedEof {
        uri: String,
        line: usize,
        col: usize,
        context: String,
    },

    /// The serializer was given a tree that no document can produce
    #[error("Malformed tree: {0}")]
    MalformedTree(String),
}

impl Error {
    /// Creates an indentation error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treearbo::Error;
    ///
    /// let err = Error::indentation(4, 1, "mixed indentation", "  \tname");
    /// assert!(err.to_string().contains("?#4:1"));
    /// ```
    pub fn indentation(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::Indentation {
            uri: UNKNOWN_URI.to_string(),
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an unterminated chain error.
    pub fn unterminated_chain(line: usize, col: usize, context: &str) -> Self {
        Error::UnterminatedChain {
            uri: UNKNOWN_URI.to_string(),
            line,
            col,
            context: context.to_string(),
        }
    }

    /// Creates a separator error.
    pub fn separator(line: usize, col: usize, context: &str) -> Self {
        Error::Separator {
            uri: UNKNOWN_URI.to_string(),
            line,
            col,
            context: context.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, context: &str) -> Self {
        Error::UnexpectedEof {
            uri: UNKNOWN_URI.to_string(),
            line,
            col,
            context: context.to_string(),
        }
    }

    /// Creates a malformed tree error.
    pub fn malformed_tree<T: Into<String>>(msg: T) -> Self {
        Error::MalformedTree(msg.into())
    }

    /// Attaches the document URI to a parse error. Other errors are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treearbo::Error;
    ///
    /// let err = Error::separator(2, 5, "a  b").in_document("notes.tree");
    /// assert!(err.to_string().starts_with("Wrong nodes separator at notes.tree#2:5"));
    /// ```
    #[must_use]
    pub fn in_document(mut self, document: &str) -> Self {
        match &mut self {
            Error::Indentation { uri, .. }
            | Error::UnterminatedChain { uri, .. }
            | Error::Separator { uri, .. }
            | Error::UnexpectedEof { uri, .. } => *uri = document.to_string(),
            Error::MalformedTree(_) => {}
        }
        self
    }

    /// Returns the 1-based line the error points at, if it came from the parser.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Indentation { line, .. }
            | Error::UnterminatedChain { line, .. }
            | Error::Separator { line, .. }
            | Error::UnexpectedEof { line, .. } => Some(*line),
            Error::MalformedTree(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
