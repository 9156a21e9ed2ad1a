//! Recursive-descent parser for S-expressions.
//!
//! Turns the tokenizer's output into a single [`Value`] tree:
//!
//! ```text
//! expr  := atom | '(' expr* ')' | '\'' expr
//! ```
//!
//! `'E` is read as `(quote E)`. Atoms are classified as integer, float or
//! symbol by [`classify_atom`]. Input must hold exactly one expression;
//! blank input parses to `None`.

mod atom;
mod cursor;
mod split;

use cursor::Cursor;
use lisp_diagnostic::{
    extra_closing_delimiter, missing_closing_delimiter, unexpected_closing_delimiter,
    unexpected_end_of_input, unexpected_token, LispResult,
};
use lisp_ir::{Position, Token, TokenKind, Value};
use lisp_stack::ensure_sufficient_stack;
use tracing::trace;

pub use atom::{classify_atom, parse_number};
pub use split::split_top_level;

/// Parser state over one token sequence.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse a token sequence holding exactly one expression.
    ///
    /// Returns `Ok(None)` for an empty sequence.
    #[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
    pub fn parse_tokens(tokens: &[Token]) -> LispResult<Option<Value>> {
        Parser::new(tokens).parse()
    }

    /// Parse one expression and require that it consumes every token.
    pub fn parse(mut self) -> LispResult<Option<Value>> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }
        let value = self.parse_expr()?;
        match self.cursor.peek() {
            None => Ok(Some(value)),
            Some(token) if token.kind == TokenKind::RParen => {
                Err(extra_closing_delimiter().at(token.position))
            }
            Some(token) => Err(unexpected_token(token.text()).at(token.position)),
        }
    }

    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested lists grow the stack
    /// instead of overflowing it.
    fn parse_expr(&mut self) -> LispResult<Value> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> LispResult<Value> {
        let Some(token) = self.cursor.advance() else {
            return Err(unexpected_end_of_input());
        };
        match &token.kind {
            TokenKind::LParen => self.parse_list(token.position),
            TokenKind::RParen => Err(unexpected_closing_delimiter().at(token.position)),
            TokenKind::Quote => {
                if self.cursor.is_at_end() {
                    return Err(unexpected_end_of_input().at(token.position));
                }
                trace!(at = %token.position, "quote shorthand");
                Ok(Value::quoted(self.parse_expr()?))
            }
            TokenKind::Atom(text) => Ok(classify_atom(text)),
        }
    }

    /// Parse list elements after `(` up to and including the matching `)`.
    fn parse_list(&mut self, open: Position) -> LispResult<Value> {
        let mut items = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(missing_closing_delimiter().at(open));
            }
            if self.cursor.check(&TokenKind::RParen) {
                self.cursor.advance();
                trace!(len = items.len(), at = %open, "list");
                return Ok(Value::List(items));
            }
            items.push(self.parse_expr()?);
        }
    }
}

/// Tokenize and parse `source` as a single expression.
///
/// Returns `Ok(None)` when `source` is blank.
pub fn parse(source: &str) -> LispResult<Option<Value>> {
    let tokens = lisp_lexer::tokenize(source);
    Parser::parse_tokens(&tokens)
}
