//! Benchmarks for the reader and evaluator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lisp_eval::{Interpreter, Value};
use lisp_parse::Parser;

const FIB: &str = "(defun fib (n) (cond ((< n 2) n) (t (+ (fib (- n 1)) (fib (- n 2))))))";

fn nested_source(depth: usize) -> String {
    let mut source = String::new();
    for i in 0..depth {
        source.push_str(&format!("(list {i} 'sym 2.5 "));
    }
    source.push_str(&")".repeat(depth));
    source
}

fn bench_tokenize(c: &mut Criterion) {
    let source = nested_source(200);
    c.bench_function("tokenize_nested_200", |b| {
        b.iter(|| black_box(lisp_lexer::tokenize(black_box(&source))));
    });
}

fn bench_parse(c: &mut Criterion) {
    let tokens = lisp_lexer::tokenize(&nested_source(200));
    c.bench_function("parse_nested_200", |b| {
        b.iter(|| black_box(Parser::parse_tokens(black_box(&tokens))));
    });
}

fn bench_eval_arithmetic(c: &mut Criterion) {
    let mut interp = Interpreter::new();
    c.bench_function("eval_arithmetic", |b| {
        b.iter(|| black_box(interp.evaluate(black_box("(+ 1 (* 2 3) (- 4 (/ 10 5)))"))));
    });
}

fn bench_eval_fib(c: &mut Criterion) {
    let mut interp = Interpreter::new();
    assert_eq!(interp.evaluate(FIB), Ok(Some(Value::symbol("fib"))));
    c.bench_function("eval_fib_15", |b| {
        b.iter(|| black_box(interp.evaluate(black_box("(fib 15)"))));
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_eval_arithmetic,
    bench_eval_fib
);
criterion_main!(benches);
