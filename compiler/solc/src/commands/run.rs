//! The `run` command: interpret a Sol source file.

use tracing::debug;

use super::{read_file, stdout_interpreter};
use crate::diagnostic::{stderr_is_tty, write_interpret_error};

/// Interpret a file in a fresh session, exiting with status 1 on error.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let mut interp = stdout_interpreter();

    let result = interp.interpret(&source, true);
    interp.print_handler().flush();

    match result {
        Ok(value) => {
            if let Some(value) = value {
                debug!(%value, "program returned");
            }
        }
        Err(err) => {
            // Nothing useful remains to be done if stderr is gone.
            let _ = write_interpret_error(std::io::stderr(), &source, &err, stderr_is_tty());
            std::process::exit(1);
        }
    }
}
