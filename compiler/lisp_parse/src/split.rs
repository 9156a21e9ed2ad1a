use lisp_ir::{Token, TokenKind};

/// Split a token stream into one slice per top-level expression.
///
/// A `'` belongs to the expression after it. A `)` with nothing open forms
/// a slice of its own (together with any pending quotes), and an
/// unterminated expression at the end becomes the last slice, so every
/// token lands in exactly one slice and parsing each slice reports its own
/// error.
pub fn split_top_level(tokens: &[Token]) -> Vec<&[Token]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen if depth > 0 => depth -= 1,
            TokenKind::RParen | TokenKind::Atom(_) => {}
            TokenKind::Quote => continue,
        }
        if depth == 0 {
            chunks.push(&tokens[start..=i]);
            start = i + 1;
        }
    }
    if start < tokens.len() {
        chunks.push(&tokens[start..]);
    }

    chunks
}
