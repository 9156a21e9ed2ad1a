//! `quote`, `setq`, `defun` and `cond`.
//!
//! Arguments reach these unevaluated. Shape errors are syntax errors.

use super::Evaluator;
use crate::builtins::SpecialForm;
use lisp_diagnostic::{malformed_form, special_form_arity, LispResult};
use lisp_ir::{names, Value};
use tracing::debug;

impl Evaluator<'_> {
    pub(super) fn eval_special(&mut self, form: SpecialForm, args: &[Value]) -> LispResult<Value> {
        match form {
            SpecialForm::Quote => Self::eval_quote(args),
            SpecialForm::Setq => self.eval_setq(args),
            SpecialForm::Defun => self.eval_defun(args),
            SpecialForm::Cond => self.eval_cond(args),
        }
    }

    /// `(quote E)` returns `E` unevaluated.
    fn eval_quote(args: &[Value]) -> LispResult<Value> {
        match args {
            [quoted] => Ok(quoted.clone()),
            _ => Err(special_form_arity(names::QUOTE, 1, args.len())),
        }
    }

    /// `(setq name expr)` binds `name` in the current scope to the value of `expr`.
    fn eval_setq(&mut self, args: &[Value]) -> LispResult<Value> {
        let [target, expr] = args else {
            return Err(special_form_arity(names::SETQ, 2, args.len()));
        };
        let Value::Symbol(name) = target else {
            return Err(malformed_form(
                names::SETQ,
                "variable name must be a symbol",
            ));
        };
        let value = self.eval(expr)?;
        debug!(name = name.as_str(), %value, "setq");
        Ok(self.env.set_variable(name.as_str(), value))
    }

    /// `(defun name (params...) body)` registers a function in the current scope.
    fn eval_defun(&mut self, args: &[Value]) -> LispResult<Value> {
        let [name, params, body] = args else {
            return Err(special_form_arity(names::DEFUN, 3, args.len()));
        };
        let Value::Symbol(name) = name else {
            return Err(malformed_form(
                names::DEFUN,
                "function name must be a symbol",
            ));
        };
        let Value::List(params) = params else {
            return Err(malformed_form(
                names::DEFUN,
                "parameter list must be a list",
            ));
        };
        let params = params
            .iter()
            .map(|param| {
                param
                    .as_symbol()
                    .map(str::to_string)
                    .ok_or_else(|| malformed_form(names::DEFUN, "parameters must be symbols"))
            })
            .collect::<LispResult<Vec<_>>>()?;
        debug!(name = name.as_str(), arity = params.len(), "defun");
        Ok(self.env.define_function(name.as_str(), params, body.clone()))
    }

    /// `(cond (test result)...)` evaluates the result of the first clause
    /// whose test is truthy, or returns `nil`.
    ///
    /// A test that is literally the symbol `t` is taken as true without
    /// evaluation. Clauses after the chosen one are never examined.
    fn eval_cond(&mut self, clauses: &[Value]) -> LispResult<Value> {
        for clause in clauses {
            let Some([test, result]) = clause.as_list() else {
                return Err(malformed_form(
                    names::COND,
                    "each clause must be a list of a condition and a result",
                ));
            };
            if test.is_symbol(names::T) || self.eval(test)?.is_truthy() {
                return self.eval(result);
            }
        }
        Ok(Value::nil())
    }
}
