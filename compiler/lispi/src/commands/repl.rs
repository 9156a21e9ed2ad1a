//! The interactive read-eval-print loop.

use lisp_eval::Interpreter;
use lisp_parse::split_top_level;
use std::io::{self, BufRead, Write};

use super::report_error;
use crate::is_incomplete;

/// Prompt for a fresh expression.
pub const PROMPT: &str = "lisp> ";
/// Prompt while an expression is still open.
pub const CONTINUATION_PROMPT: &str = "...> ";

/// Run the REPL until `input` is exhausted or the user types `exit`/`quit`.
///
/// Lines accumulate until every `(` is closed, then each complete
/// expression in the buffer is evaluated and printed as `=> value`. Errors
/// go to `err` and the session continues. `:env` lists global bindings.
pub fn run_repl(
    interp: &mut Interpreter,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Lisp interpreter {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Type 'exit' or 'quit' to leave, ':env' to list bindings.")?;

    let mut buffer = String::new();
    let mut lines = input.lines();
    loop {
        let prompt = if buffer.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        };
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            // Input closed mid-expression; report what is pending.
            if !buffer.trim().is_empty() {
                writeln!(out)?;
                eval_buffer(interp, &buffer, out, err)?;
            }
            break;
        };

        if buffer.is_empty() {
            let command = line.trim();
            if command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit") {
                break;
            }
            if command == ":env" {
                print_env(interp, out)?;
                continue;
            }
            if command.is_empty() {
                continue;
            }
        }

        buffer.push_str(&line);
        buffer.push('\n');
        if is_incomplete(&buffer) {
            continue;
        }
        eval_buffer(interp, &buffer, out, err)?;
        buffer.clear();
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn eval_buffer(
    interp: &mut Interpreter,
    buffer: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let tokens = lisp_lexer::tokenize(buffer);
    for chunk in split_top_level(&tokens) {
        match interp.evaluate_tokens(chunk) {
            Ok(Some(value)) => writeln!(out, "=> {value}")?,
            Ok(None) => {}
            Err(e) => {
                report_error(&e, err)?;
                err.flush()?;
            }
        }
    }
    Ok(())
}

fn print_env(interp: &Interpreter, out: &mut impl Write) -> io::Result<()> {
    let env = interp.env();
    for (name, value) in env.global_variables() {
        writeln!(out, "  {name} = {value}")?;
    }
    for (name, function) in env.global_functions() {
        writeln!(out, "  {name} ({})", function.params.join(" "))?;
    }
    Ok(())
}

/// Run the REPL on the process's stdin/stdout/stderr.
pub fn start_repl(max_call_depth: Option<usize>) {
    let mut interp = Interpreter::builder().max_call_depth(max_call_depth).build();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = run_repl(
        &mut interp,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    ) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
