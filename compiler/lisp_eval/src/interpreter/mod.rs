//! The interpreter facade: text in, value out, with a persistent global
//! environment between calls.

mod builder;

pub use builder::InterpreterBuilder;

use crate::diagnostics::CallStack;
use crate::eval::Evaluator;
use crate::Environment;
use lisp_diagnostic::LispResult;
use lisp_ir::{Token, Value};
use lisp_parse::Parser;
use tracing::debug;

/// Reads and evaluates expressions against one global environment.
///
/// Bindings made by `setq` and `defun` at top level persist across calls,
/// and a failed call leaves the environment usable. The interpreter holds
/// `Rc`s and is not `Sync`; share one across threads behind a lock.
pub struct Interpreter {
    env: Environment,
    max_call_depth: Option<usize>,
}

impl Interpreter {
    /// An interpreter with the default call depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Tokenize, parse and evaluate `source`, which must hold at most one
    /// expression. Blank input evaluates to `None`.
    pub fn evaluate(&mut self, source: &str) -> LispResult<Option<Value>> {
        let tokens = lisp_lexer::tokenize(source);
        self.evaluate_tokens(&tokens)
    }

    /// Parse and evaluate an already tokenized expression.
    pub fn evaluate_tokens(&mut self, tokens: &[Token]) -> LispResult<Option<Value>> {
        match Parser::parse_tokens(tokens)? {
            Some(value) => self.evaluate_value(&value).map(Some),
            None => Ok(None),
        }
    }

    /// Evaluate an already parsed expression.
    pub fn evaluate_value(&mut self, value: &Value) -> LispResult<Value> {
        debug!(%value, "evaluate");
        let call_stack = CallStack::new(self.max_call_depth);
        Evaluator::new(&mut self.env, call_stack).eval(value)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    #[inline]
    pub fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
