//! Atom classification: integer, float, or symbol.

use lisp_diagnostic::{number_format, LispResult};
use lisp_ir::Value;

/// Classify an atom token. Never fails; non-numeric text is a symbol.
///
/// Integers are base-10 `i64` with an optional sign. Floats are made only
/// of digits, signs, `.`, `e` and `E`, and must be finite, so `inf`, `nan`
/// and `1e999` stay symbols. Symbol text keeps its case.
pub fn classify_atom(text: &str) -> Value {
    number(text).unwrap_or_else(|| Value::symbol(text))
}

/// Convert `text` to a number, failing for anything [`classify_atom`] would
/// read as a symbol.
pub fn parse_number(text: &str) -> LispResult<Value> {
    number(text).ok_or_else(|| number_format(text))
}

fn number(text: &str) -> Option<Value> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Value::Integer(n));
    }
    if !looks_like_float(text) {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .map(Value::Float)
}

fn looks_like_float(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}
