//! Command handlers for the `sol` CLI.
//!
//! Each submodule implements one subcommand. File-reading and the
//! interpreter configuration shared by `run` and `repl` live here.

mod fmt;
mod parse;
mod repl;
mod run;

pub use fmt::format_file;
pub use parse::parse_file;
pub use repl::{repl, run_repl, PROMPT};
pub use run::run_file;

use sol_eval::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
use tracing::warn;

use crate::MAX_CALL_DEPTH_VAR;

/// Read a source file, exiting with an error message if it can't be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// Parse a call depth limit from the environment variable's value.
///
/// Falls back to the default for anything that is not a positive integer.
pub fn max_call_depth(raw: Option<&str>) -> usize {
    match raw.map(str::parse::<usize>) {
        None => DEFAULT_MAX_CALL_DEPTH,
        Some(Ok(depth)) if depth > 0 => depth,
        Some(_) => {
            warn!(value = ?raw, "ignoring invalid {MAX_CALL_DEPTH_VAR}");
            DEFAULT_MAX_CALL_DEPTH
        }
    }
}

/// Interpreter printing to stdout, with the call depth limit taken from
/// the environment.
pub(crate) fn stdout_interpreter() -> Interpreter {
    let raw = std::env::var(MAX_CALL_DEPTH_VAR).ok();
    InterpreterBuilder::new()
        .max_call_depth(max_call_depth(raw.as_deref()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_depth_from_environment_value() {
        assert_eq!(max_call_depth(None), DEFAULT_MAX_CALL_DEPTH);
        assert_eq!(max_call_depth(Some("64")), 64);
        assert_eq!(max_call_depth(Some("0")), DEFAULT_MAX_CALL_DEPTH);
        assert_eq!(max_call_depth(Some("deep")), DEFAULT_MAX_CALL_DEPTH);
    }
}
