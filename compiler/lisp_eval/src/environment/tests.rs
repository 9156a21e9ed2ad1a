#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use lisp_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

#[test]
fn test_global_constants() {
    let env = Environment::new();
    assert_eq!(env.get_variable("t").unwrap(), Value::t());
    assert_eq!(env.get_variable("nil").unwrap(), Value::nil());
    assert!(!env.has_variable("T"));
    assert_eq!(env.depth(), 1);
}

#[test]
fn test_set_and_get() {
    let mut env = Environment::new();
    let stored = env.set_variable("x", Value::int(42));
    assert_eq!(stored, Value::int(42));
    assert_eq!(env.get_variable("x").unwrap(), Value::int(42));
    assert!(env.has_variable("x"));
}

#[test]
fn test_undefined_variable() {
    let env = Environment::new();
    let err = env.get_variable("missing").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.message, "undefined variable: missing");
    assert!(!env.has_variable("missing"));
}

#[test]
fn test_child_sees_parent() {
    let mut env = Environment::new();
    env.set_variable("x", Value::int(1));
    env.push_scope();
    assert_eq!(env.get_variable("x").unwrap(), Value::int(1));
    assert_eq!(env.depth(), 2);
}

#[test]
fn test_child_shadows_parent() {
    let mut env = Environment::new();
    env.set_variable("x", Value::int(1));

    env.push_scope();
    env.set_variable("x", Value::int(2));
    assert_eq!(env.get_variable("x").unwrap(), Value::int(2));

    env.pop_scope();
    assert_eq!(env.get_variable("x").unwrap(), Value::int(1));
}

#[test]
fn test_parent_never_sees_child() {
    let mut env = Environment::new();
    env.push_scope();
    env.set_variable("local", Value::int(7));
    env.define_function("helper", vec![], Value::int(0));
    env.pop_scope();
    assert!(!env.has_variable("local"));
    assert!(!env.has_function("helper"));
}

#[test]
fn test_nested_scopes_walk_to_global() {
    let mut env = Environment::new();
    env.set_variable("g", Value::symbol("global"));
    env.push_scope();
    env.set_variable("a", Value::int(1));
    env.push_scope();
    assert_eq!(env.get_variable("g").unwrap(), Value::symbol("global"));
    assert_eq!(env.get_variable("a").unwrap(), Value::int(1));
    assert_eq!(env.depth(), 3);
}

#[test]
fn test_pop_never_removes_global() {
    let mut env = Environment::new();
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert!(env.has_variable("t"));
}

#[test]
fn test_define_and_get_function() {
    let mut env = Environment::new();
    let body = Value::list(vec![Value::symbol("+"), Value::symbol("x"), Value::int(1)]);
    let name = env.define_function("inc", vec!["x".to_string()], body.clone());
    assert_eq!(name, Value::symbol("inc"));

    let def = env.get_function("inc").unwrap();
    assert_eq!(def.params, vec!["x".to_string()]);
    assert_eq!(def.body, body);
    assert_eq!(def.arity(), 1);
    assert!(env.has_function("inc"));
}

#[test]
fn test_undefined_function() {
    let env = Environment::new();
    let err = env.get_function("nope").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2002);
    assert!(!env.has_function("nope"));
}

#[test]
fn test_functions_and_variables_are_separate() {
    let mut env = Environment::new();
    env.define_function("f", vec![], Value::int(1));
    assert!(!env.has_variable("f"));
    env.set_variable("g", Value::int(2));
    assert!(!env.has_function("g"));
}

#[test]
fn test_redefinition_replaces() {
    let mut env = Environment::new();
    env.define_function("f", vec![], Value::int(1));
    let old = env.get_function("f").unwrap();
    env.define_function("f", vec![], Value::int(2));
    assert_eq!(env.get_function("f").unwrap().body, Value::int(2));
    assert_eq!(old.body, Value::int(1));
}

#[test]
fn test_global_listing_is_sorted() {
    let mut env = Environment::new();
    env.set_variable("b", Value::int(2));
    env.set_variable("a", Value::int(1));
    env.define_function("z", vec![], Value::nil());
    env.define_function("y", vec!["n".to_string()], Value::nil());

    let names: Vec<&str> = env.global_variables().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["a", "b", "nil", "t"]);
    let names: Vec<&str> = env.global_functions().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["y", "z"]);
}
