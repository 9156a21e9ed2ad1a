//! Token types for the tokenizer.

use super::Position;
use std::fmt;

/// A token with the position of its first character.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }

    /// Source text of the token.
    #[inline]
    pub fn text(&self) -> &str {
        self.kind.as_str()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {}:{}",
            self.kind, self.position.line, self.position.column
        )
    }
}

/// Token kinds.
///
/// Delimiters are always single characters. Everything else is an `Atom`
/// whose numeric/symbolic classification is left to the parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `'`
    Quote,
    /// Maximal run of non-whitespace, non-delimiter characters.
    Atom(String),
}

impl TokenKind {
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Quote => "'",
            TokenKind::Atom(text) => text,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
