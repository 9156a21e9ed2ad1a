//! Command handlers for the `lisp` CLI.
//!
//! Each submodule implements one command. The `*_source` functions do the
//! work against in-memory text and writers; the `*_file` wrappers read the
//! file and talk to the real stdout/stderr.

use lisp_diagnostic::LispError;
use std::io::{self, Write};

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use explain::explain_error;
pub use repl::{run_repl, start_repl, CONTINUATION_PROMPT, PROMPT};
pub use run::{run_file, run_source, RunSummary};

/// Backtrace frames printed before the rest are summarized.
const MAX_BACKTRACE_FRAMES: usize = 10;

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print an error with the form it came from and the calls it happened in.
pub fn report_error(err: &LispError, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{err}")?;
    if let Some(form) = &err.form {
        writeln!(out, "  in: {form}")?;
    }
    if !err.backtrace.is_empty() {
        writeln!(out, "  called from:")?;
        for name in err.backtrace.iter().take(MAX_BACKTRACE_FRAMES) {
            writeln!(out, "    {name}")?;
        }
        let hidden = err.backtrace.len().saturating_sub(MAX_BACKTRACE_FRAMES);
        if hidden > 0 {
            writeln!(out, "    ... {hidden} more")?;
        }
    }
    Ok(())
}
