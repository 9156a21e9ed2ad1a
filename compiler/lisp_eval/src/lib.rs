//! Evaluator for the S-expression interpreter.
//!
//! - [`Environment`]: chained variable and function scopes
//! - [`Evaluator`] / [`evaluate`]: tree-walking evaluation of [`Value`]s
//! - [`Builtin`] and [`SpecialForm`]: the fixed operator set
//! - [`Interpreter`]: text in, value out, over a persistent environment

mod builtins;
mod diagnostics;
mod environment;
mod eval;
mod function;
mod interpreter;
mod operators;

pub use builtins::{Builtin, SpecialForm};
pub use diagnostics::{CallFrame, CallStack};
pub use environment::Environment;
pub use eval::{evaluate, Evaluator, DEFAULT_MAX_CALL_DEPTH};
pub use function::FunctionDefinition;
pub use interpreter::{Interpreter, InterpreterBuilder};

pub use lisp_diagnostic::{LispError, LispErrorKind, LispResult};
pub use lisp_ir::Value;
