//! Reserved symbol spellings.
//!
//! All reserved names are lowercase and case-sensitive. `QUOTE`, `T` and
//! `NIL` in source text are ordinary symbols.

/// Head symbol produced by the `'` shorthand and recognized as the quote form.
pub const QUOTE: &str = "quote";

/// Canonical true object.
pub const T: &str = "t";

/// The only falsy value.
pub const NIL: &str = "nil";

pub const SETQ: &str = "setq";
pub const DEFUN: &str = "defun";
pub const COND: &str = "cond";
