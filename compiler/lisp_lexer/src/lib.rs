//! Tokenizer for S-expressions using logos.
//!
//! `(`, `)` and `'` are always single-character tokens. Whitespace ends the
//! current atom and is otherwise dropped. Every other run of characters is
//! an atom; whether it is a number or a symbol is decided by the parser.
//!
//! Tokenizing never fails.

use lisp_ir::{Position, Token, TokenKind};
use logos::Logos;

/// Raw token from logos (before positions are attached).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("'")]
    Quote,

    #[token("\n")]
    Newline,

    /// Whitespace other than a newline.
    #[regex(r"[^\S\n]+")]
    Space,

    #[regex(r"[^\s()']+")]
    Atom,
}

/// Tracks the 1-based position of the next character.
struct LineColumn {
    line: u32,
    column: u32,
}

impl LineColumn {
    fn new() -> Self {
        LineColumn {
            line: Position::START.line,
            column: Position::START.column,
        }
    }

    #[inline]
    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Step past `slice`, which never contains a newline.
    fn advance(&mut self, slice: &str) {
        let width = u32::try_from(slice.chars().count()).unwrap_or(u32::MAX);
        self.column = self.column.saturating_add(width);
    }

    fn newline(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column = 1;
    }
}

/// Split `source` into tokens, each tagged with the position of its first character.
///
/// Lines and columns start at 1. A newline moves to the next line and resets
/// the column; every other character, whitespace included, advances the
/// column by one. Empty or all-whitespace input yields no tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut at = LineColumn::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let slice = lexer.slice();
        let kind = match raw {
            Ok(RawToken::Newline) => {
                at.newline();
                continue;
            }
            Ok(RawToken::Space) => {
                at.advance(slice);
                continue;
            }
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::Quote) => TokenKind::Quote,
            // The patterns above cover every character; an unmatched slice
            // is still kept as an atom so no input is lost.
            Ok(RawToken::Atom) | Err(()) => TokenKind::Atom(slice.to_string()),
        };
        tokens.push(Token::new(kind, at.position()));
        at.advance(slice);
    }

    tokens
}

/// Token texts only, without positions.
pub fn tokenize_texts(source: &str) -> Vec<String> {
    tokenize(source)
        .into_iter()
        .map(|token| token.text().to_string())
        .collect()
}
