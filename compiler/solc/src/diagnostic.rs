//! Error rendering for the terminal.
//!
//! Parse errors get an `ariadne` report pointing into the source; runtime
//! errors carry no location and print as a single `error:` line.

use std::io::{self, Write};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use sol_eval::InterpretError;
use sol_parse::ParseError;

/// Write a labelled source report for a parse error.
///
/// Parse spans are byte offsets, so the report indexes by byte.
pub fn write_parse_error<W: Write>(
    out: W,
    source: &str,
    err: &ParseError,
    color: bool,
) -> io::Result<()> {
    let range = err.span.to_range();
    let start = range.start.min(source.len());
    let end = range.end.clamp(start, source.len());
    Report::build(ReportKind::Error, (), start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(format!("expected {}", err.expected))
        .with_label(
            Label::new(start..end)
                .with_message(format!("found {}", err.found))
                .with_color(Color::Red),
        )
        .finish()
        .write(Source::from(source), out)
}

/// Report a failed `interpret` call.
pub fn write_interpret_error<W: Write>(
    mut out: W,
    source: &str,
    err: &InterpretError,
    color: bool,
) -> io::Result<()> {
    match err {
        InterpretError::Parse(err) => write_parse_error(out, source, err, color),
        InterpretError::Eval(err) => writeln!(out, "error: {err}"),
    }
}

/// Whether stderr is a terminal, for choosing colored output.
pub fn stderr_is_tty() -> bool {
    io::IsTerminal::is_terminal(&io::stderr())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        let err = sol_eval::Interpreter::new()
            .interpret(source, true)
            .unwrap_err();
        let mut out = Vec::new();
        write_interpret_error(&mut out, source, &err, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_error_report_names_expectation_and_input() {
        let report = render("var ;");
        assert!(report.contains("expected one of identifier"), "{report}");
        assert!(report.contains("found `;`"), "{report}");
    }

    #[test]
    fn parse_error_at_end_of_input() {
        let report = render("print 1");
        assert!(report.contains("found end of input"), "{report}");
    }

    #[test]
    fn parse_error_after_multibyte_text_labels_the_right_token() {
        let report = render("print \"ééééééééé\" + ;");
        assert!(report.contains("found `;`"), "{report}");
        assert!(report.contains(":1:21]"), "{report}");
    }

    #[test]
    fn runtime_error_is_one_line() {
        assert_eq!(render("print nope;"), "error: undefined variable `nope`\n");
    }
}
