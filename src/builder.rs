//! Node builder: turns tokenized lines into a [`Forest`].
//!
//! Nesting is recovered from indentation alone, with an explicit stack of open frames instead
//! of recursion, so deeply nested documents are bounded by memory rather than by the call
//! stack.
//!
//! Every token of a line opens one frame at the line's depth. A frame owns its node until it is
//! closed; closing pops it and appends the node to the frame below (or to the forest). Because
//! the tokens of one line share a depth, they close together and end up chained, each one the
//! only child of the token before it:
//!
//! ```text
//! name \Jin        frames: [name@0, Jin@0]       -> name -> [Jin]
//! hobby            frames: [hobby@0]
//! \tkendo          frames: [hobby@0, kendo@1]    -> hobby -> [kendo, ...]
//! ```

use crate::error::{Error, Result};
use crate::lexer::{self, Line, Token, TokenKind};
use crate::node::{Forest, Node, StringLeaf, StructNode};
use crate::options::ParseOptions;

/// A node under construction and the depth of the line that opened it.
#[derive(Debug)]
struct Frame {
    depth: usize,
    node: Node,
}

impl Frame {
    fn open(depth: usize, token: Token) -> Self {
        let node = match token.kind {
            TokenKind::Word => StructNode::new(token.text, Vec::new())
                .with_span(token.span)
                .into(),
            TokenKind::Data => StringLeaf::new(token.text).with_span(token.span).into(),
        };
        Frame { depth, node }
    }
}

/// Rebuilds a forest from a stream of tokenized lines.
///
/// Most users should call [`string_to_tree`](crate::string_to_tree); the builder is exposed for
/// callers that tokenize lines themselves.
///
/// # Examples
///
/// ```rust
/// use treearbo::builder::Builder;
/// use treearbo::lexer::tokenize_line;
///
/// let mut builder = Builder::new();
/// builder.push_line(tokenize_line("user", 1).unwrap()).unwrap();
/// builder.push_line(tokenize_line("\tname \\Jin", 2).unwrap()).unwrap();
/// let forest = builder.finish().unwrap();
///
/// assert_eq!(forest[0].children()[0].children()[0].value(), Some("Jin"));
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    stack: Vec<Frame>,
    forest: Forest,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole document.
    ///
    /// # Errors
    ///
    /// Returns the first tokenizer or structural error, tagged with `options.uri`.
    pub fn build(text: &str, options: &ParseOptions) -> Result<Forest> {
        let mut builder = Builder::new();
        let mut lines = 0;

        for (index, raw) in text.split_inclusive('\n').enumerate() {
            let number = index + 1;
            let content = match raw.strip_suffix('\n') {
                Some(content) => content,
                None if options.require_final_newline => {
                    return Err(Error::unexpected_eof(number, raw.chars().count() + 1, raw)
                        .in_document(&options.uri));
                }
                None => raw,
            };

            let line = lexer::tokenize_line(content, number)
                .map_err(|err| err.in_document(&options.uri))?;
            builder
                .push_line_in(line, content)
                .map_err(|err| err.in_document(&options.uri))?;
            lines = number;
        }

        let forest = builder
            .finish()
            .map_err(|err| err.in_document(&options.uri))?;
        tracing::debug!(lines, roots = forest.len(), "built tree");
        Ok(forest)
    }

    /// Adds one tokenized line.
    ///
    /// A blank line adds no node, but it still closes every block at or below its depth, so an
    /// empty line ends all open blocks. Its tabs obey the same depth rule as any other line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Indentation`] if the line is not exactly one level below its parent
    /// and [`Error::UnterminatedChain`] if the parent line ended with a string leaf.
    pub fn push_line(&mut self, line: Line) -> Result<()> {
        self.push_line_in(line, "")
    }

    fn push_line_in(&mut self, line: Line, context: &str) -> Result<()> {
        while self.stack.last().map_or(false, |top| top.depth >= line.depth) {
            self.close_top()?;
        }

        let col = line.depth + 1;
        match self.stack.last() {
            Some(parent) if parent.depth + 1 == line.depth => {
                if parent.node.is_leaf() && !line.is_blank() {
                    return Err(Error::unterminated_chain(line.number, col, context));
                }
            }
            Some(parent) => {
                let msg = format!(
                    "expected at most {} tab(s), found {}",
                    parent.depth + 1,
                    line.depth
                );
                return Err(Error::indentation(line.number, col, &msg, context));
            }
            None if line.depth > 0 => {
                let msg = format!("expected no indentation, found {} tab(s)", line.depth);
                return Err(Error::indentation(line.number, col, &msg, context));
            }
            None => {}
        }

        let depth = line.depth;
        self.stack
            .extend(line.tokens.into_iter().map(|token| Frame::open(depth, token)));
        Ok(())
    }

    /// Closes every open frame and returns the forest.
    ///
    /// # Errors
    ///
    /// Only fails if frames were chained beneath a string leaf, which `push_line` rejects.
    pub fn finish(mut self) -> Result<Forest> {
        while !self.stack.is_empty() {
            self.close_top()?;
        }
        Ok(self.forest)
    }

    fn close_top(&mut self) -> Result<()> {
        let Some(frame) = self.stack.pop() else {
            return Ok(());
        };

        match self.stack.last_mut() {
            None => self.forest.push(frame.node),
            Some(Frame {
                node: Node::Struct(parent),
                ..
            }) => parent.children.push(frame.node),
            Some(Frame {
                node: Node::Leaf(leaf),
                ..
            }) => {
                let span = frame.node.span();
                let context = format!("{} beneath \\{}", frame.node, leaf.value);
                return Err(Error::unterminated_chain(span.line, span.col, &context));
            }
        }
        Ok(())
    }
}
