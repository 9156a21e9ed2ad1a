//! Built-in operators and special forms.
//!
//! Both sets are closed: dispatch is a `match` on the operator name, and
//! anything not listed here is looked up as a user function.

use crate::operators;
use lisp_diagnostic::{arity_mismatch, Arity, LispResult};
use lisp_ir::{names, Value};

/// Forms whose arguments are not evaluated before dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialForm {
    Quote,
    Setq,
    Defun,
    Cond,
}

impl SpecialForm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            names::QUOTE => Some(SpecialForm::Quote),
            names::SETQ => Some(SpecialForm::Setq),
            names::DEFUN => Some(SpecialForm::Defun),
            names::COND => Some(SpecialForm::Cond),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Quote => names::QUOTE,
            SpecialForm::Setq => names::SETQ,
            SpecialForm::Defun => names::DEFUN,
            SpecialForm::Cond => names::COND,
        }
    }
}

/// Operators applied to evaluated arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Equal,
    Atom,
    List,
}

impl Builtin {
    pub const ALL: [Builtin; 9] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Lt,
        Builtin::Gt,
        Builtin::Equal,
        Builtin::Atom,
        Builtin::List,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Lt => "<",
            Builtin::Gt => ">",
            Builtin::Equal => "equal",
            Builtin::Atom => "atom",
            Builtin::List => "list",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Builtin::Add | Builtin::Mul | Builtin::List => Arity::Any,
            Builtin::Sub | Builtin::Div => Arity::AtLeast(1),
            Builtin::Lt | Builtin::Gt | Builtin::Equal => Arity::Exactly(2),
            Builtin::Atom => Arity::Exactly(1),
        }
    }

    /// Apply to already-evaluated arguments.
    pub fn apply(self, args: Vec<Value>) -> LispResult<Value> {
        match self {
            Builtin::Add => operators::add(&args),
            Builtin::Sub => operators::sub(&args),
            Builtin::Mul => operators::mul(&args),
            Builtin::Div => operators::div(&args),
            Builtin::List => Ok(Value::List(args)),
            Builtin::Lt | Builtin::Gt | Builtin::Equal | Builtin::Atom => self.apply_fixed(&args),
        }
    }

    fn apply_fixed(self, args: &[Value]) -> LispResult<Value> {
        match (self, args) {
            (Builtin::Lt, [a, b]) => operators::less_than(a, b),
            (Builtin::Gt, [a, b]) => operators::greater_than(a, b),
            (Builtin::Equal, [a, b]) => Ok(Value::from_bool(a == b)),
            (Builtin::Atom, [a]) => Ok(Value::from_bool(a.is_atom())),
            _ => Err(arity_mismatch(self.name(), self.arity(), args.len())),
        }
    }
}
