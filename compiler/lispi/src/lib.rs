//! Front end for the S-expression interpreter.
//!
//! The `lisp` binary is a thin argument parser over [`commands`]. Every
//! command writes to caller-supplied sinks so it can be driven from tests.

pub mod commands;
mod input;
mod logging;

pub use input::is_incomplete;
pub use logging::init_tracing;
