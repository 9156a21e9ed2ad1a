//! The interpreter's error type.
//!
//! `LispErrorKind` carries the structured data for each failure. Factory
//! functions (e.g. [`division_by_zero`]) are the public way to build errors:
//! they fill in both `kind` and the rendered `message`.

use crate::ErrorCode;
use lisp_ir::{Position, Value};
use std::fmt;

/// Result of any reader or evaluator operation.
pub type LispResult<T> = Result<T, LispError>;

/// Number of arguments an operator accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, n) = match self {
            Arity::Exactly(n) => ("", *n),
            Arity::AtLeast(n) => ("at least ", *n),
            Arity::Any => return f.write_str("any number of arguments"),
        };
        let arg_word = if n == 1 { "argument" } else { "arguments" };
        write!(f, "{prefix}{n} {arg_word}")
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LispErrorKind {
    // Reader
    Syntax {
        message: String,
    },
    NumberFormat {
        text: String,
    },

    // Evaluation
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },
    TypeError {
        operator: String,
        expected: &'static str,
        got: &'static str,
    },
    DivisionByZero,
    StackOverflow {
        depth: usize,
    },
}

impl LispErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax { .. } => ErrorCode::E1001,
            Self::NumberFormat { .. } => ErrorCode::E1002,
            Self::UndefinedVariable { .. } => ErrorCode::E2001,
            Self::UndefinedFunction { .. } => ErrorCode::E2002,
            Self::ArityMismatch { .. } => ErrorCode::E2003,
            Self::TypeError { .. } => ErrorCode::E2004,
            Self::DivisionByZero => ErrorCode::E2005,
            Self::StackOverflow { .. } => ErrorCode::E2006,
        }
    }
}

impl fmt::Display for LispErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { message } => f.write_str(message),
            Self::NumberFormat { text } => write!(f, "invalid number: `{text}`"),
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(f, "{name} expects {expected}, got {got}"),
            Self::TypeError {
                operator,
                expected,
                got,
            } => write!(f, "{operator} expects {expected} operands, got {got}"),
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }
        }
    }
}

/// An interpreter error.
#[derive(Clone, Debug, PartialEq)]
pub struct LispError {
    pub kind: LispErrorKind,
    /// Rendered from `kind`.
    pub message: String,
    /// Where the offending token starts, when the error came from the reader.
    pub position: Option<Position>,
    /// Canonical text of the expression being evaluated when the error was raised.
    pub form: Option<String>,
    /// User functions active at the error site, most recent call first.
    pub backtrace: Vec<String>,
}

impl LispError {
    fn from_kind(kind: LispErrorKind) -> Self {
        let message = kind.to_string();
        LispError {
            kind,
            message,
            position: None,
            form: None,
            backtrace: Vec::new(),
        }
    }

    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Record the offending form. Only the innermost form is kept.
    #[must_use]
    pub fn in_form(mut self, form: &Value) -> Self {
        if self.form.is_none() {
            self.form = Some(form.to_string());
        }
        self
    }

    /// Attach the active user-function frames. Only the deepest snapshot is kept.
    #[must_use]
    pub fn with_backtrace(mut self, frames: Vec<String>) -> Self {
        if self.backtrace.is_empty() {
            self.backtrace = frames;
        }
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Reader errors (`E1xxx`) as opposed to evaluation errors.
    pub fn is_reader_error(&self) -> bool {
        matches!(
            self.kind,
            LispErrorKind::Syntax { .. } | LispErrorKind::NumberFormat { .. }
        )
    }
}

impl fmt::Display for LispError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code(), self.message)?;
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LispError {}

// Reader errors

/// Generic syntax error.
#[cold]
pub fn syntax_error(message: impl Into<String>) -> LispError {
    LispError::from_kind(LispErrorKind::Syntax {
        message: message.into(),
    })
}

/// Input ended inside a list.
#[cold]
pub fn missing_closing_delimiter() -> LispError {
    syntax_error("missing closing delimiter")
}

/// `)` where an expression was expected.
#[cold]
pub fn unexpected_closing_delimiter() -> LispError {
    syntax_error("unexpected closing delimiter")
}

/// A complete expression was followed by `)`.
#[cold]
pub fn extra_closing_delimiter() -> LispError {
    syntax_error("extra closing delimiter")
}

/// A complete expression was followed by another token.
#[cold]
pub fn unexpected_token(text: &str) -> LispError {
    syntax_error(format!("unexpected token after expression: `{text}`"))
}

/// Input ended where an expression was required.
#[cold]
pub fn unexpected_end_of_input() -> LispError {
    syntax_error("unexpected end of input")
}

/// A special form with the wrong number of elements.
#[cold]
pub fn special_form_arity(form: &str, expected: usize, got: usize) -> LispError {
    syntax_error(format!(
        "malformed {form}: expects {}, got {got}",
        Arity::Exactly(expected)
    ))
}

/// A special form whose shape is wrong in some other way.
#[cold]
pub fn malformed_form(form: &str, reason: &str) -> LispError {
    syntax_error(format!("malformed {form}: {reason}"))
}

#[cold]
pub fn number_format(text: &str) -> LispError {
    LispError::from_kind(LispErrorKind::NumberFormat {
        text: text.to_string(),
    })
}

// Evaluation errors

#[cold]
pub fn undefined_variable(name: &str) -> LispError {
    LispError::from_kind(LispErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> LispError {
    LispError::from_kind(LispErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: Arity, got: usize) -> LispError {
    LispError::from_kind(LispErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Non-numeric operand to an arithmetic operator or comparison.
#[cold]
pub fn type_error(operator: &str, expected: &'static str, got: &Value) -> LispError {
    LispError::from_kind(LispErrorKind::TypeError {
        operator: operator.to_string(),
        expected,
        got: got.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> LispError {
    LispError::from_kind(LispErrorKind::DivisionByZero)
}

#[cold]
pub fn stack_overflow(depth: usize) -> LispError {
    LispError::from_kind(LispErrorKind::StackOverflow { depth })
}
