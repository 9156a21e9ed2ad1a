//! Diagnostics for the S-expression interpreter.
//!
//! Every failure in the reader or evaluator is a [`LispError`]: a structured
//! [`LispErrorKind`], its rendered message, and an [`ErrorCode`] for lookup
//! with `lisp --explain`.

mod error;
mod error_code;

pub use error::{
    arity_mismatch, division_by_zero, extra_closing_delimiter, malformed_form,
    missing_closing_delimiter, number_format, special_form_arity, stack_overflow, syntax_error,
    type_error, undefined_function, undefined_variable, unexpected_closing_delimiter,
    unexpected_end_of_input, unexpected_token, Arity, LispError, LispErrorKind, LispResult,
};
pub use error_code::ErrorCode;
