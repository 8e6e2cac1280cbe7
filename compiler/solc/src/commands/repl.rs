//! The interactive read-eval-print loop.
//!
//! Every line is interpreted in the same session without a reset, so
//! variables and functions carry over from one line to the next. Errors are
//! reported and the loop continues; end of input ends it.

use std::io::{self, BufRead, Write};

use sol_eval::Interpreter;

use super::stdout_interpreter;
use crate::diagnostic::{stderr_is_tty, write_interpret_error};

pub const PROMPT: &str = ">> ";

/// Run the REPL on stdin/stdout.
pub fn run_repl() {
    let mut interp = stdout_interpreter();
    let stdin = io::stdin();
    if let Err(e) = repl(stdin.lock(), io::stdout(), &mut interp, stderr_is_tty()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Read lines from `input` and interpret each one, writing prompts,
/// captured output, top-level `return` values and errors to `out`.
pub fn repl<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    interp: &mut Interpreter,
    color: bool,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let source = line.trim_end();
        if source.is_empty() {
            continue;
        }

        let result = interp.interpret(source, false);
        out.write_all(interp.print_handler().take_output().as_bytes())?;
        match result {
            Ok(Some(value)) => writeln!(out, "{value}")?,
            Ok(None) => {}
            Err(err) => write_interpret_error(&mut out, source, &err, color)?,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;
    use sol_eval::{buffer_handler, InterpreterBuilder};

    use super::*;

    fn transcript(input: &str) -> String {
        let mut interp = InterpreterBuilder::new()
            .print_handler(buffer_handler())
            .build();
        let mut out = Vec::new();
        repl(input.as_bytes(), &mut out, &mut interp, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn variables_persist_between_lines() {
        assert_eq!(transcript("var a = 2;\nprint a * 3;\n"), ">> >> 6\n>> \n");
    }

    #[test]
    fn functions_persist_between_lines() {
        assert_eq!(
            transcript("func sq(n) { return n * n; }\nprint sq(4);\n"),
            ">> >> 16\n>> \n"
        );
    }

    #[test]
    fn top_level_return_is_echoed() {
        assert_eq!(transcript("return 1 + 1;\nreturn;\n"), ">> 2\n>> null\n>> \n");
    }

    #[test]
    fn runtime_error_is_reported_and_loop_continues() {
        assert_eq!(
            transcript("print x;\nvar x = 1;\nprint x;\n"),
            ">> error: undefined variable `x`\n>> >> 1\n>> \n"
        );
    }

    #[test]
    fn output_before_an_error_is_kept() {
        assert_eq!(
            transcript("print 1; print 1 / 0;\n"),
            ">> 1\nerror: division by zero\n>> \n"
        );
    }

    #[test]
    fn parse_error_is_reported_and_loop_continues() {
        let out = transcript("print ;\nprint 2;\n");
        assert!(out.contains("expected"), "{out}");
        assert!(out.ends_with(">> 2\n>> \n"), "{out}");
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(transcript("\n  \nprint 1;"), ">> >> >> 1\n>> \n");
    }
}
