//! `lisp`: REPL and script runner for the S-expression interpreter.

use lisp_eval::DEFAULT_MAX_CALL_DEPTH;
use lispi::commands::{explain_error, lex_file, parse_file, run_file, start_repl};

fn main() {
    lispi::init_tracing();

    let mut max_call_depth = Some(DEFAULT_MAX_CALL_DEPTH);
    let mut args = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            max_call_depth = parse_max_depth(value);
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        start_repl(max_call_depth);
        return;
    };

    match command.as_str() {
        "repl" => start_repl(max_call_depth),
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: lisp run <file.lisp> [--max-depth=<n>|none]");
                std::process::exit(1);
            };
            run_file(path, max_call_depth);
        }
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: lisp lex <file.lisp>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: lisp parse <file.lisp>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "--explain" | "explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: lisp --explain <ERROR_CODE>");
                eprintln!("Example: lisp --explain E2005");
                std::process::exit(1);
            };
            explain_error(code);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("lisp {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("lisp"))
            {
                run_file(command, max_call_depth);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// `none` lifts the limit; anything else must be a positive integer.
fn parse_max_depth(value: &str) -> Option<usize> {
    if value.eq_ignore_ascii_case("none") {
        return None;
    }
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Some(depth),
        _ => {
            eprintln!("error: invalid --max-depth value '{value}' (expected a positive integer or 'none')");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lisp interpreter");
    println!();
    println!("Usage: lisp [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start an interactive session (default)");
    println!("  run <file.lisp>      Evaluate every expression in a file");
    println!("  lex <file.lisp>      Tokenize and display tokens");
    println!("  parse <file.lisp>    Parse and display each expression");
    println!("  --explain <code>     Explain an error code (e.g., E2005)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Limit nested function calls (default: {DEFAULT_MAX_CALL_DEPTH})");
    println!("  --max-depth=none     Remove the call depth limit");
    println!();
    println!("Environment:");
    println!("  LISP_LOG=<filter>    Enable tracing output on stderr (e.g., LISP_LOG=debug)");
    println!();
    println!("Examples:");
    println!("  lisp");
    println!("  lisp run fact.lisp");
    println!("  lisp fact.lisp --max-depth=500");
    println!("  lisp --explain E2006");
}
