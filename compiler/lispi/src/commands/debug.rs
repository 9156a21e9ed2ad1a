//! Debug commands: `lex` and `parse` for inspecting the reader.

use lisp_ir::TokenKind;
use lisp_parse::{split_top_level, Parser};
use std::io::{self, Write};

use super::{read_file, report_error};

/// Print one token per line as `line:column  kind  text`.
pub fn lex_source(source: &str, out: &mut impl Write) -> io::Result<()> {
    let tokens = lisp_lexer::tokenize(source);
    writeln!(out, "{} tokens", tokens.len())?;
    for token in &tokens {
        let kind = match token.kind {
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Quote => "quote",
            TokenKind::Atom(_) => "atom",
        };
        writeln!(
            out,
            "  {}:{}\t{kind}\t{}",
            token.position.line,
            token.position.column,
            token.text()
        )?;
    }
    Ok(())
}

/// Print the canonical form of each top-level expression.
///
/// Returns the number of expressions that failed to parse.
pub fn parse_source(source: &str, out: &mut impl Write, err: &mut impl Write) -> io::Result<usize> {
    let tokens = lisp_lexer::tokenize(source);
    let mut errors = 0;
    for chunk in split_top_level(&tokens) {
        match Parser::parse_tokens(chunk) {
            Ok(Some(value)) => writeln!(out, "{value}")?,
            Ok(None) => {}
            Err(e) => {
                errors += 1;
                report_error(&e, err)?;
            }
        }
    }
    Ok(errors)
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    println!("Tokens for '{path}':");
    if let Err(e) = lex_source(&content, &mut io::stdout().lock()) {
        eprintln!("error writing output: {e}");
        std::process::exit(1);
    }
}

/// Parse a file and display each expression, exiting with status 1 on
/// syntax errors.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match parse_source(&content, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("error writing output: {e}");
            std::process::exit(1);
        }
    }
}
