//! The runtime value type.
//!
//! `Value` is both the parse tree and the runtime datum. There is no boolean
//! variant: truth is "not the symbol `nil`", and predicates return the
//! symbols `t` and `nil`.

use crate::names;
use lisp_stack::ensure_sufficient_stack;
use std::fmt;

/// A parsed or evaluated S-expression.
///
/// `PartialEq` is exact structural equality, and is what the `equal`
/// predicate uses: an `Integer` never equals a `Float`.
///
/// Trees can be nested arbitrarily deep. Cloning, comparing and printing
/// grow the stack as needed, and dropping walks the tree with a work list.
#[derive(Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Symbol(String),
    List(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Integer(n)
    }

    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// The empty list `()`.
    #[inline]
    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    /// The symbol `nil`.
    pub fn nil() -> Self {
        Value::symbol(names::NIL)
    }

    /// The symbol `t`.
    pub fn t() -> Self {
        Value::symbol(names::T)
    }

    /// Convert a host boolean to `t` / `nil`.
    pub fn from_bool(b: bool) -> Self {
        if b {
            Value::t()
        } else {
            Value::nil()
        }
    }

    /// `(quote inner)`.
    pub fn quoted(inner: Value) -> Self {
        Value::List(vec![Value::symbol(names::QUOTE), inner])
    }

    /// Anything except the symbol `nil` is truthy.
    ///
    /// The empty list is truthy: it is a list, not the symbol `nil`.
    pub fn is_truthy(&self) -> bool {
        !self.is_symbol(names::NIL)
    }

    /// True for non-lists and for the empty list.
    pub fn is_atom(&self) -> bool {
        match self {
            Value::List(items) => items.is_empty(),
            Value::Integer(_) | Value::Float(_) | Value::Symbol(_) => true,
        }
    }

    /// True if this is the symbol spelled exactly `name`.
    #[inline]
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, Value::Symbol(s) if s == name)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric view as `f64`; `None` for symbols and lists.
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed integer/float arithmetic is defined over f64"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Symbol(_) | Value::List(_) => None,
        }
    }

    /// Name used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Integer(n) => Value::Integer(*n),
            Value::Float(x) => Value::Float(*x),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::List(items) => ensure_sufficient_stack(|| Value::List(items.clone())),
        }
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "equal compares floats exactly")]
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => ensure_sufficient_stack(|| a == b),
            _ => false,
        }
    }
}

impl Drop for Value {
    /// Tears nested lists down through a work list instead of recursing
    /// once per level.
    fn drop(&mut self) {
        let Value::List(items) = self else {
            return;
        };
        if items.iter().all(Value::is_atom) {
            return;
        }
        let mut pending = std::mem::take(items);
        while let Some(mut value) = pending.pop() {
            if let Value::List(children) = &mut value {
                pending.append(children);
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::symbol(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Canonical printed form. Re-tokenizing and re-parsing it yields an equal tree.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Symbol(s) => f.write_str(s),
            Value::List(items) => ensure_sufficient_stack(|| {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }),
        }
    }
}

/// Integral floats keep a `.0` so they read back as floats.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}
