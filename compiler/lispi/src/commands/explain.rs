//! The `explain` command: display documentation for error codes.

use lisp_diagnostic::ErrorCode;

/// Display the explanation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Known codes: {}", known_codes());
        std::process::exit(1);
    };

    println!("{code}: {}", code.explanation());
}

fn known_codes() -> String {
    ErrorCode::ALL
        .iter()
        .map(ErrorCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
