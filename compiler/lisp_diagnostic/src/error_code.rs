use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Reader (tokenizer/parser) errors
/// - E2xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Reader Errors (E1xxx)
    /// Malformed syntax: unbalanced delimiters, malformed special form
    E1001,
    /// Text is not a valid number
    E1002,

    // Evaluation Errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Undefined function
    E2002,
    /// Wrong number of arguments
    E2003,
    /// Operand of the wrong type
    E2004,
    /// Division by zero
    E2005,
    /// Call depth limit exceeded
    E2006,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
        }
    }

    /// Long-form explanation shown by `lisp --explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => {
                "The input is not a well-formed expression. Every `(` needs a matching `)`, \
                 a `'` must be followed by an expression, and special forms must have \
                 their documented shape: (quote E), (setq name value), \
                 (defun name (params...) body), (cond (test result)...)."
            }
            ErrorCode::E1002 => {
                "The text was converted to a number but is neither a base-10 integer \
                 nor a decimal number."
            }
            ErrorCode::E2001 => {
                "A variable was read that is not bound in the current scope or any \
                 enclosing scope. Bind it first with (setq name value)."
            }
            ErrorCode::E2002 => {
                "The head of a list is not a special form, a built-in operator, or a \
                 function defined with defun."
            }
            ErrorCode::E2003 => {
                "A built-in operator or user function received a different number of \
                 arguments than it accepts."
            }
            ErrorCode::E2004 => {
                "An arithmetic operator or numeric comparison received a symbol or a \
                 list where a number is required."
            }
            ErrorCode::E2005 => {
                "A division had a divisor equal to zero. Division never produces an \
                 infinite result."
            }
            ErrorCode::E2006 => {
                "User function calls nested deeper than the interpreter's call depth \
                 limit, usually because a recursive function never reaches its base case."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    /// Case-insensitive: `e2005` parses as `E2005`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
