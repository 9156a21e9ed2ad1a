//! Tree-walking evaluation.
//!
//! Numbers and the empty list evaluate to themselves. A symbol evaluates to
//! its innermost binding, or to itself when unbound. A non-empty list is a
//! form: its head names a special form, a built-in operator, or a user
//! function, in that order of precedence.

mod special_forms;

use crate::builtins::{Builtin, SpecialForm};
use crate::diagnostics::{CallFrame, CallStack};
use crate::Environment;
use lisp_diagnostic::{arity_mismatch, Arity, LispResult};
use lisp_ir::Value;
use lisp_stack::{ensure_sufficient_stack, remaining_stack};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Nested user-function calls allowed unless configured otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Evaluate `value` against `env` with the default call depth limit.
pub fn evaluate(value: &Value, env: &mut Environment) -> LispResult<Value> {
    Evaluator::new(env, CallStack::new(Some(DEFAULT_MAX_CALL_DEPTH))).eval(value)
}

/// Evaluation state: the environment being read and mutated, and the
/// user-function calls in progress.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
    call_stack: CallStack,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment, call_stack: CallStack) -> Self {
        Evaluator { env, call_stack }
    }

    /// Evaluate one value.
    ///
    /// Errors carry the innermost form that failed, and the active user
    /// functions when raised inside a call.
    pub fn eval(&mut self, value: &Value) -> LispResult<Value> {
        ensure_sufficient_stack(|| self.eval_inner(value))
    }

    fn eval_inner(&mut self, value: &Value) -> LispResult<Value> {
        match value {
            Value::Integer(_) | Value::Float(_) => Ok(value.clone()),
            Value::Symbol(name) => Ok(self
                .env
                .lookup_variable(name)
                .cloned()
                .unwrap_or_else(|| value.clone())),
            Value::List(items) => match items.split_first() {
                None => Ok(value.clone()),
                Some((head, args)) => self
                    .eval_form(head, args)
                    .map_err(|err| err.in_form(value)),
            },
        }
    }

    fn eval_form(&mut self, head: &Value, args: &[Value]) -> LispResult<Value> {
        let name: Cow<'_, str> = match head {
            Value::Symbol(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        };
        if let Some(form) = SpecialForm::from_name(&name) {
            return self.eval_special(form, args);
        }
        if let Some(builtin) = Builtin::from_name(&name) {
            return self.eval_builtin(builtin, args);
        }
        self.call_function(&name, args)
    }

    /// Evaluate arguments left to right, stopping at the first error.
    fn eval_args(&mut self, args: &[Value]) -> LispResult<Vec<Value>> {
        args.iter().map(|arg| self.eval(arg)).collect()
    }

    fn eval_builtin(&mut self, builtin: Builtin, args: &[Value]) -> LispResult<Value> {
        let arity = builtin.arity();
        if !arity.accepts(args.len()) {
            return Err(arity_mismatch(builtin.name(), arity, args.len()));
        }
        let values = self.eval_args(args)?;
        builtin.apply(values)
    }

    /// Call a `defun`-defined function.
    ///
    /// The function is looked up and its arity checked before any argument
    /// is evaluated. The body runs in a new scope whose parent is the
    /// caller's current scope; that scope is popped whether or not the body
    /// succeeds.
    fn call_function(&mut self, name: &str, args: &[Value]) -> LispResult<Value> {
        let function = self.env.get_function(name)?;
        let arity = Arity::Exactly(function.arity());
        if !arity.accepts(args.len()) {
            return Err(arity_mismatch(name, arity, args.len()));
        }
        let values = self.eval_args(args)?;

        if let Err(err) = self.call_stack.push(CallFrame::new(name)) {
            debug!(
                name,
                depth = self.call_stack.depth(),
                remaining_stack = ?remaining_stack(),
                "call depth limit reached"
            );
            return Err(self.call_stack.attach_backtrace(err));
        }
        trace!(name, depth = self.call_stack.depth(), "call");

        self.env.push_scope();
        for (param, value) in function.params.iter().zip(values) {
            self.env.set_variable(param.as_str(), value);
        }
        let result = self.eval(&function.body);
        self.env.pop_scope();

        let result = result.map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();
        result
    }
}
