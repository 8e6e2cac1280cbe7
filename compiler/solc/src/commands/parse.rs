//! The `parse` command: dump the syntax tree of a file.

use super::read_file;
use crate::diagnostic::{stderr_is_tty, write_parse_error};

pub fn parse_file(path: &str) {
    let source = read_file(path);
    match sol_parse::parse(&source) {
        Ok(program) => println!("{program:#?}"),
        Err(err) => {
            let _ = write_parse_error(std::io::stderr(), &source, &err, stderr_is_tty());
            std::process::exit(1);
        }
    }
}
