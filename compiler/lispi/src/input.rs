use lisp_ir::TokenKind;

/// True while `source` has unclosed `(` or ends in a dangling `'`.
///
/// The REPL keeps reading lines until this is false. A `)` with nothing
/// open is left for the parser to report and does not close a later `(`.
pub fn is_incomplete(source: &str) -> bool {
    let tokens = lisp_lexer::tokenize(source);
    let mut depth = 0usize;
    for token in &tokens {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::Quote | TokenKind::Atom(_) => {}
        }
    }
    depth > 0 || tokens.last().is_some_and(|t| t.kind == TokenKind::Quote)
}
