//! Parse error reporting.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sol_ir::Span;

use crate::{parse, ParseError};

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(stmts) => panic!("expected {source:?} to fail, got {stmts:?}"),
        Err(err) => err,
    }
}

#[test]
fn test_missing_semicolon_at_end_of_input() {
    let err = parse_err("var a");
    assert!(err.expected.contains("`;`"), "{err}");
    assert_eq!(err.found, "end of input");
    assert_eq!(err.span, Span::point(5));
}

#[test]
fn test_missing_identifier() {
    let err = parse_err("var ;");
    assert!(err.expected.contains("identifier"), "{err}");
    assert_eq!(err.found, "`;`");
    assert_eq!((err.line, err.column), (1, 5));
}

#[test]
fn test_error_points_at_farthest_failure() {
    let err = parse_err("var a = 1;\nprint 1 +;\n");
    assert_eq!((err.line, err.column), (2, 10));
    assert_eq!(err.found, "`;`");
}

#[test]
fn test_declaration_is_not_a_legal_if_body() {
    let err = parse_err("if (x) var y = 1;");
    assert_eq!(err.line, 1);
}

#[test]
fn test_unterminated_string() {
    let err = parse_err("print \"abc");
    assert!(err.expected.contains("closing `\"`"), "{err}");
}

#[test]
fn test_unclosed_block() {
    let err = parse_err("{ print 1;");
    assert!(err.expected.contains("`}`"), "{err}");
}

#[test]
fn test_display_lists_expectations() {
    let err = parse_err("var ;");
    assert_eq!(
        err.to_string(),
        "1:5: expected one of identifier, `=`, `(`, found `;`"
    );
}
