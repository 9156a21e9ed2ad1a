//! Lisp IR - core data types shared by every stage of the interpreter.
//!
//! This crate contains:
//! - [`Value`]: the universal runtime datum (integer, float, symbol, list)
//! - [`Token`] and [`TokenKind`]: lexer output
//! - [`Position`]: 1-based line/column of a token
//! - [`names`]: the reserved symbol spellings (`quote`, `t`, `nil`, ...)
//!
//! The parser produces only `Value`s, and the evaluator consumes and returns
//! only `Value`s, so the tree the parser builds is also the program the
//! evaluator runs.

pub mod names;
mod position;
mod token;
mod value;

pub use position::Position;
pub use token::{Token, TokenKind};
pub use value::Value;
