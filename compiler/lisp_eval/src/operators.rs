//! Arithmetic and comparison over evaluated operands.
//!
//! A result is an `Integer` when every operand is an `Integer` and the exact
//! result is an integer that fits in `i64`. Anything else is computed in
//! `f64` and returned as a `Float`.

use lisp_diagnostic::{arity_mismatch, division_by_zero, type_error, Arity, LispResult};
use lisp_ir::Value;
use std::cmp::Ordering;

/// Every operand as `i64`, or `None` if any is not an `Integer`.
fn all_ints(args: &[Value]) -> Option<Vec<i64>> {
    args.iter()
        .map(|v| match v {
            Value::Integer(n) => Some(*n),
            _ => None,
        })
        .collect()
}

/// Every operand as `f64`; the first non-number is a type error.
fn floats(op: &str, args: &[Value]) -> LispResult<Vec<f64>> {
    args.iter()
        .map(|v| v.as_f64().ok_or_else(|| type_error(op, "number", v)))
        .collect()
}

#[allow(clippy::float_cmp, reason = "only an exact zero is rejected")]
#[inline]
fn is_zero(x: f64) -> bool {
    x == 0.0
}

/// `(+ ...)`; `0` with no operands.
pub(crate) fn add(args: &[Value]) -> LispResult<Value> {
    let xs = floats("+", args)?;
    if let Some(sum) = all_ints(args).and_then(|ns| ns.into_iter().try_fold(0i64, i64::checked_add))
    {
        return Ok(Value::Integer(sum));
    }
    Ok(Value::Float(xs.into_iter().sum()))
}

/// `(* ...)`; `1` with no operands.
pub(crate) fn mul(args: &[Value]) -> LispResult<Value> {
    let xs = floats("*", args)?;
    if let Some(product) =
        all_ints(args).and_then(|ns| ns.into_iter().try_fold(1i64, i64::checked_mul))
    {
        return Ok(Value::Integer(product));
    }
    Ok(Value::Float(xs.into_iter().product()))
}

/// `(- x)` negates; `(- x y ...)` subtracts the rest from `x`.
pub(crate) fn sub(args: &[Value]) -> LispResult<Value> {
    let xs = floats("-", args)?;
    let Some((&first, rest)) = xs.split_first() else {
        return Err(arity_mismatch("-", Arity::AtLeast(1), 0));
    };
    let exact = all_ints(args).and_then(|ns| match ns.split_first() {
        Some((n, [])) => n.checked_neg(),
        Some((n, rest)) => rest.iter().try_fold(*n, |acc, &m| acc.checked_sub(m)),
        None => None,
    });
    if let Some(n) = exact {
        return Ok(Value::Integer(n));
    }
    if rest.is_empty() {
        return Ok(Value::Float(-first));
    }
    Ok(Value::Float(rest.iter().fold(first, |acc, x| acc - x)))
}

/// `(/ x)` is the float reciprocal; `(/ x y ...)` divides `x` by the rest.
///
/// Any zero divisor is an error, for integers and floats alike.
pub(crate) fn div(args: &[Value]) -> LispResult<Value> {
    let xs = floats("/", args)?;
    let Some((&first, rest)) = xs.split_first() else {
        return Err(arity_mismatch("/", Arity::AtLeast(1), 0));
    };
    if rest.is_empty() {
        if is_zero(first) {
            return Err(division_by_zero());
        }
        return Ok(Value::Float(1.0 / first));
    }
    if rest.iter().copied().any(is_zero) {
        return Err(division_by_zero());
    }
    if let Some(q) = all_ints(args).as_deref().and_then(exact_quotient) {
        return Ok(Value::Integer(q));
    }
    Ok(Value::Float(rest.iter().fold(first, |acc, x| acc / x)))
}

/// Left-to-right integer quotient, or `None` as soon as a step has a remainder.
fn exact_quotient(ns: &[i64]) -> Option<i64> {
    let (first, rest) = ns.split_first()?;
    rest.iter().try_fold(*first, |acc, &d| {
        if acc.checked_rem(d)? == 0 {
            acc.checked_div(d)
        } else {
            None
        }
    })
}

/// Numeric ordering of two operands. `None` when a float is NaN.
fn compare(op: &str, a: &Value, b: &Value) -> LispResult<Option<Ordering>> {
    if let (Value::Integer(x), Value::Integer(y)) = (a, b) {
        return Ok(Some(x.cmp(y)));
    }
    let x = a.as_f64().ok_or_else(|| type_error(op, "number", a))?;
    let y = b.as_f64().ok_or_else(|| type_error(op, "number", b))?;
    Ok(x.partial_cmp(&y))
}

pub(crate) fn less_than(a: &Value, b: &Value) -> LispResult<Value> {
    let ordering = compare("<", a, b)?;
    Ok(Value::from_bool(ordering == Some(Ordering::Less)))
}

pub(crate) fn greater_than(a: &Value, b: &Value) -> LispResult<Value> {
    let ordering = compare(">", a, b)?;
    Ok(Value::from_bool(ordering == Some(Ordering::Greater)))
}
