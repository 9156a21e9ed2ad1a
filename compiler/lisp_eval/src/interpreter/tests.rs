#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use lisp_diagnostic::{ErrorCode, LispErrorKind};
use crate::DEFAULT_MAX_CALL_DEPTH;
use lisp_ir::Position;
use pretty_assertions::assert_eq;

fn eval(interp: &mut Interpreter, source: &str) -> Value {
    interp
        .evaluate(source)
        .unwrap_or_else(|err| panic!("{source}: {err}"))
        .expect("expected a value")
}

#[test]
fn test_blank_input_is_absent() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.evaluate("").unwrap(), None);
    assert_eq!(interp.evaluate("   \n").unwrap(), None);
    assert_eq!(interp.evaluate_tokens(&[]).unwrap(), None);
}

#[test]
fn test_state_persists_between_calls() {
    let mut interp = Interpreter::new();
    eval(&mut interp, "(setq y 10)");
    assert_eq!(eval(&mut interp, "y"), Value::int(10));
    eval(&mut interp, "(defun double (n) (* n 2))");
    assert_eq!(eval(&mut interp, "(double y)"), Value::int(20));
}

#[test]
fn test_errors_leave_interpreter_usable() {
    let mut interp = Interpreter::new();
    eval(&mut interp, "(setq a 1)");
    assert!(interp.evaluate("(/ a 0)").is_err());
    assert!(interp.evaluate("(+ a").is_err());
    assert_eq!(eval(&mut interp, "(+ a 1)"), Value::int(2));
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn test_syntax_error_has_position() {
    let mut interp = Interpreter::new();
    let err = interp.evaluate("\n  (+ 1 2").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.position, Some(Position::new(2, 3)));
    assert_eq!(
        err.to_string(),
        "error[E1001]: missing closing delimiter at line 2, column 3"
    );
}

#[test]
fn test_evaluate_tokens_and_value() {
    let mut interp = Interpreter::new();
    let tokens = lisp_lexer::tokenize("(list 1 'a)");
    assert_eq!(
        interp.evaluate_tokens(&tokens).unwrap(),
        Some(Value::list(vec![Value::int(1), Value::symbol("a")]))
    );

    let tree = lisp_parse::parse("(* 6 7)").unwrap().unwrap();
    assert_eq!(interp.evaluate_value(&tree).unwrap(), Value::int(42));
}

#[test]
fn test_builder_call_depth() {
    let mut interp = Interpreter::builder().max_call_depth(Some(5)).build();
    assert_eq!(interp.max_call_depth(), Some(5));
    eval(&mut interp, "(defun f (n) (cond ((< n 1) done) (t (f (- n 1)))))");
    assert_eq!(eval(&mut interp, "(f 4)"), Value::symbol("done"));
    let err = interp.evaluate("(f 5)").unwrap_err();
    assert_eq!(err.kind, LispErrorKind::StackOverflow { depth: 5 });
}

#[test]
fn test_builder_default_depth() {
    assert_eq!(
        Interpreter::new().max_call_depth(),
        Some(DEFAULT_MAX_CALL_DEPTH)
    );
    assert_eq!(
        Interpreter::builder()
            .max_call_depth(None)
            .build()
            .max_call_depth(),
        None
    );
}

#[test]
fn test_builder_with_environment() {
    let mut env = Environment::new();
    env.set_variable("preset", Value::int(3));
    let mut interp = Interpreter::builder().env(env).build();
    assert_eq!(eval(&mut interp, "(+ preset 1)"), Value::int(4));
}

#[test]
fn test_env_mut_bindings_visible() {
    let mut interp = Interpreter::default();
    interp.env_mut().set_variable("k", Value::float(0.5));
    assert_eq!(eval(&mut interp, "(* k 4)"), Value::float(2.0));
}
