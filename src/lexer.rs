//! Line tokenizer.
//!
//! Splits one physical line into its indentation depth and an ordered token list:
//!
//! ```text
//! \tname \Jin and more
//! ^ depth 1
//!   ^^^^ Word("name")
//!        ^^^^^^^^^^^^^ Data("Jin and more")
//! ```
//!
//! - Depth is the number of leading tabs.
//! - A word runs up to the next whitespace, the next `\`, or the end of the line.
//! - A `\` starts a data token that takes the rest of the line verbatim, spaces included.
//! - Tokens are separated by exactly one space.

use crate::error::{Error, Result};
use crate::node::Span;

/// The indentation unit: one tab per depth level.
pub const INDENT: char = '\t';

/// Separator between two tokens of the same line.
pub const SEPARATOR: char = ' ';

/// Marker that turns the rest of the line into a string token.
pub const DATA_MARKER: char = '\\';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Bareword; becomes a struct node label
    Word,
    /// Backslash-escaped rest of line; becomes a string leaf
    Data,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    fn word(text: &str, line: usize, col: usize) -> Self {
        Token {
            kind: TokenKind::Word,
            text: text.to_string(),
            span: Span::new(line, col, text.chars().count()),
        }
    }

    fn data(text: &str, line: usize, col: usize) -> Self {
        Token {
            kind: TokenKind::Data,
            text: text.to_string(),
            span: Span::new(line, col, text.chars().count()),
        }
    }
}

/// One tokenized physical line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the document
    pub number: usize,
    pub depth: usize,
    pub tokens: Vec<Token>,
}

impl Line {
    /// Returns `true` if the line holds no token (empty or indentation only).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizes one line of text, given without its trailing line feed.
///
/// # Examples
///
/// ```rust
/// use treearbo::lexer::{tokenize_line, TokenKind};
///
/// let line = tokenize_line("\t\thobby \\role play", 7).unwrap();
/// assert_eq!(line.depth, 2);
/// assert_eq!(line.tokens.len(), 2);
/// assert_eq!(line.tokens[1].kind, TokenKind::Data);
/// assert_eq!(line.tokens[1].text, "role play");
/// ```
///
/// # Errors
///
/// Returns [`Error::Indentation`] if the indentation contains anything but tabs, and
/// [`Error::Separator`] if two tokens are not separated by exactly one space.
pub fn tokenize_line(text: &str, number: usize) -> Result<Line> {
    let depth = text.chars().take_while(|&ch| ch == INDENT).count();
    // Tabs are one byte wide, so the depth doubles as a byte offset.
    let mut rest = &text[depth..];
    let mut col = depth + 1;

    if rest.starts_with(char::is_whitespace) {
        return Err(Error::indentation(
            number,
            col,
            "indentation must be made of tabs only",
            text,
        ));
    }

    let mut tokens = Vec::new();

    while !rest.is_empty() {
        if let Some(value) = rest.strip_prefix(DATA_MARKER) {
            tokens.push(Token::data(value, number, col + 1));
            break;
        }

        let end = rest
            .find(|ch: char| ch.is_whitespace() || ch == DATA_MARKER)
            .unwrap_or(rest.len());

        if end == 0 {
            return Err(Error::separator(number, col, text));
        }

        let word = &rest[..end];
        tokens.push(Token::word(word, number, col));
        col += word.chars().count();
        rest = &rest[end..];

        if let Some(tail) = rest.strip_prefix(SEPARATOR) {
            rest = tail;
            col += 1;
        }
    }

    Ok(Line {
        number,
        depth,
        tokens,
    })
}
