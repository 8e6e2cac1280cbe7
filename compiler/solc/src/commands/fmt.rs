//! The `fmt` command: print a file in canonical form.

use super::read_file;
use crate::diagnostic::{stderr_is_tty, write_parse_error};

pub fn format_file(path: &str) {
    let source = read_file(path);
    match sol_parse::parse(&source) {
        Ok(program) => print!("{}", sol_fmt::format_program(&program)),
        Err(err) => {
            let _ = write_parse_error(std::io::stderr(), &source, &err, stderr_is_tty());
            std::process::exit(1);
        }
    }
}
