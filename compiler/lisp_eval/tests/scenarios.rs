//! End-to-end programs run through `Interpreter::evaluate`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lisp_diagnostic::{ErrorCode, LispErrorKind};
use lisp_eval::{Interpreter, Value};
use pretty_assertions::assert_eq;

/// Evaluate each line in order and return the printed form of the last result.
fn run(lines: &[&str]) -> String {
    let mut interp = Interpreter::new();
    let mut last = None;
    for line in lines {
        last = interp
            .evaluate(line)
            .unwrap_or_else(|err| panic!("{line}: {err}"));
    }
    last.expect("last line produced a value").to_string()
}

fn run_err(lines: &[&str]) -> lisp_diagnostic::LispError {
    let mut interp = Interpreter::new();
    let (last, setup) = lines.split_last().expect("at least one line");
    for line in setup {
        interp.evaluate(line).unwrap();
    }
    interp.evaluate(last).unwrap_err()
}

#[test]
fn arithmetic() {
    assert_eq!(run(&["(+ 2 (* 3 8))"]), "26");
    assert_eq!(run(&["(- 10 4)"]), "6");
    assert_eq!(run(&["(- 7)"]), "-7");
    assert_eq!(run(&["(/ 10 2)"]), "5");
    assert_eq!(run(&["(/ 7 2)"]), "3.5");
    assert_eq!(run(&["(/ 4)"]), "0.25");
    assert_eq!(run(&["(+ 1 2.0)"]), "3.0");
    assert_eq!(run(&["(* 1.5 2)"]), "3.0");
    assert_eq!(run(&["(+)"]), "0");
    assert_eq!(run(&["(*)"]), "1");
}

#[test]
fn division_by_zero() {
    let err = run_err(&["(/ 1 0)"]);
    assert_eq!(err.code(), ErrorCode::E2005);
    assert_eq!(err.to_string(), "error[E2005]: division by zero");
}

#[test]
fn variables() {
    assert_eq!(run(&["(setq y 10)", "y"]), "10");
    assert_eq!(run(&["(setq y 10)", "(setq y (+ y 1))", "y"]), "11");
}

#[test]
fn factorial() {
    let fact = "(defun fact (n) (cond ((< n 2) 1) (t (* n (fact (- n 1))))))";
    assert_eq!(run(&[fact, "(fact 5)"]), "120");
    assert_eq!(run(&[fact, "(fact 20)"]), "2432902008176640000");
    // 21! no longer fits in i64.
    assert_eq!(run(&[fact, "(fact 21)"]), "51090942171709440000.0");
}

#[test]
fn fibonacci() {
    let fib = "(defun fib (n) (cond ((< n 2) n) (t (+ (fib (- n 1)) (fib (- n 2))))))";
    assert_eq!(run(&[fib, "(fib 15)"]), "610");
}

#[test]
fn shadowing() {
    assert_eq!(
        run(&["(defun f (x) (+ x 1))", "(setq x 100)", "(f 5)"]),
        "6"
    );
    assert_eq!(run(&["(defun f (x) (+ x 1))", "(setq x 100)", "(f 5)", "x"]), "100");
}

#[test]
fn predicates() {
    assert_eq!(run(&["(atom (quote (1 2)))"]), "nil");
    assert_eq!(run(&["(atom 5)"]), "t");
    assert_eq!(run(&["(atom ())"]), "t");
    assert_eq!(run(&["(atom 'sym)"]), "t");
    assert_eq!(run(&["(equal '(1 (2 x)) (list 1 (list 2 'x)))"]), "t");
    assert_eq!(run(&["(equal 1 1.0)"]), "nil");
    assert_eq!(run(&["(equal 2.5 (/ 5 2))"]), "t");
    assert_eq!(run(&["(equal 'a 'b)"]), "nil");
    assert_eq!(run(&["(< 1 2)"]), "t");
    assert_eq!(run(&["(> 1 2)"]), "nil");
}

#[test]
fn lists_and_quote() {
    assert_eq!(run(&["()"]), "()");
    assert_eq!(run(&["(list)"]), "()");
    assert_eq!(run(&["(list 1 (+ 1 1) 'three)"]), "(1 2 three)");
    assert_eq!(run(&["'(a (b c))"]), "(a (b c))");
    assert_eq!(run(&["(quote (+ 1 2))"]), "(+ 1 2)");
    assert_eq!(run(&["''x"]), "(quote x)");
}

#[test]
fn cond_forms() {
    assert_eq!(run(&["(setq n 5)", "(cond ((< n 0) neg) ((> n 0) pos) (t zero))"]), "pos");
    assert_eq!(run(&["(cond ((> 1 2) no))"]), "nil");
}

#[test]
fn syntax_error() {
    let err = run_err(&["(+ 1 2"]);
    assert_eq!(err.code(), ErrorCode::E1001);
    let err = run_err(&["(+ 1 2))"]);
    assert_eq!(err.message, "extra closing delimiter");
}

#[test]
fn undefined_function() {
    let err = run_err(&["(undefined-fn 1 2)"]);
    assert_eq!(
        err.kind,
        LispErrorKind::UndefinedFunction {
            name: "undefined-fn".to_string()
        }
    );
    assert_eq!(err.to_string(), "error[E2002]: undefined function: undefined-fn");
}

#[test]
fn arity_mismatch() {
    let err = run_err(&["(defun f (a b) a)", "(f 1)"]);
    assert_eq!(err.code(), ErrorCode::E2003);
    assert_eq!(err.message, "f expects 2 arguments, got 1");

    let err = run_err(&["(atom 1 2)"]);
    assert_eq!(err.message, "atom expects 1 argument, got 2");
}

#[test]
fn type_error() {
    let err = run_err(&["(+ 1 'a)"]);
    assert_eq!(err.code(), ErrorCode::E2004);
    let err = run_err(&["(< '(1) 2)"]);
    assert_eq!(err.message, "< expects number operands, got list");
}

#[test]
fn runaway_recursion() {
    let err = run_err(&["(defun loop (n) (loop (+ n 1)))", "(loop 0)"]);
    assert_eq!(err.code(), ErrorCode::E2006);
}

#[test]
fn values_print_canonically() {
    let mut interp = Interpreter::new();
    let value = interp.evaluate("(list 1 2.0 -3 'x ())").unwrap().unwrap();
    assert_eq!(value.to_string(), "(1 2.0 -3 x ())");
    assert_eq!(
        value,
        Value::list(vec![
            Value::int(1),
            Value::float(2.0),
            Value::int(-3),
            Value::symbol("x"),
            Value::empty_list(),
        ])
    );
}

#[test]
fn deeply_nested_values_survive_quote_print_and_drop() {
    let depth = 100_000;
    let mut interp = Interpreter::new();
    let source = format!("(setq deep (quote {}x{}))", "(".repeat(depth), ")".repeat(depth));
    let value = interp.evaluate(&source).unwrap().unwrap();
    let printed = value.to_string();
    assert_eq!(printed.len(), 2 * depth + 1);
    assert_eq!(interp.evaluate("(equal deep deep)").unwrap(), Some(Value::t()));
    assert_eq!(interp.evaluate("(atom deep)").unwrap(), Some(Value::nil()));
}

#[test]
fn deeply_nested_calls_build_deep_lists() {
    let depth = 20_000;
    let source = format!("{}1{}", "(list ".repeat(depth), ")".repeat(depth));
    let mut interp = Interpreter::new();
    let value = interp.evaluate(&source).unwrap().unwrap();
    let printed = value.to_string();
    assert!(printed.starts_with("((("));
    assert!(printed.ends_with("1)))"));
    assert_eq!(printed.len(), 2 * depth + 1);
}
