//! The `run` command: evaluate every top-level expression in a file.

use lisp_eval::Interpreter;
use lisp_parse::split_top_level;
use std::io::{self, Write};
use tracing::debug;

use super::{read_file, report_error};

/// Outcome of running a source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Top-level expressions attempted.
    pub evaluated: usize,
    pub errors: usize,
}

impl RunSummary {
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Evaluate each top-level expression of `source` in order.
///
/// Results are printed to `out`, one per line. An error is reported to
/// `err` and running continues with the next expression; bindings made
/// before the error are kept.
pub fn run_source(
    interp: &mut Interpreter,
    source: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<RunSummary> {
    let tokens = lisp_lexer::tokenize(source);
    let mut summary = RunSummary::default();

    for chunk in split_top_level(&tokens) {
        summary.evaluated += 1;
        match interp.evaluate_tokens(chunk) {
            Ok(Some(value)) => writeln!(out, "{value}")?,
            Ok(None) => {}
            Err(e) => {
                summary.errors += 1;
                report_error(&e, err)?;
            }
        }
    }

    debug!(
        evaluated = summary.evaluated,
        errors = summary.errors,
        "run finished"
    );
    Ok(summary)
}

/// Run a file, exiting with status 1 if any expression failed.
pub fn run_file(path: &str, max_call_depth: Option<usize>) {
    let content = read_file(path);
    let mut interp = Interpreter::builder().max_call_depth(max_call_depth).build();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = match run_source(&mut interp, &content, &mut stdout.lock(), &mut stderr.lock())
    {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error writing output: {e}");
            std::process::exit(1);
        }
    };

    if summary.has_errors() {
        std::process::exit(1);
    }
}
