//! Parse error types.
//!
//! The parser is a PEG: every alternative may fail and be rolled back, so a
//! failure is only reported once no alternative can continue. The error
//! then describes the *farthest* offset any alternative reached, together
//! with every terminal that was tried at that offset.

use std::fmt;

use sol_ir::Span;
use thiserror::Error;

use crate::Cursor;

/// Longest unmatched-input excerpt quoted in an error.
const FOUND_EXCERPT_CHARS: usize = 16;

/// Malformed input. Aborts the current parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{line}:{column}: expected {expected}, found {found}")]
pub struct ParseError {
    /// Location of the unmatched input.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: usize,
    /// 1-based column of `span.start`.
    pub column: usize,
    /// Terminals that would have allowed parsing to continue.
    pub expected: Expected,
    /// Excerpt of the unmatched input (or "end of input").
    pub found: String,
}

/// The set of terminals expected at the failure offset, in the order they
/// were tried.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Expected(pub Vec<&'static str>);

impl Expected {
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(&label)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => f.write_str("valid input"),
            [only] => f.write_str(only),
            [first, second] => write!(f, "{first} or {second}"),
            labels => write!(f, "one of {}", labels.join(", ")),
        }
    }
}

/// Tracks the farthest failure seen while parsing.
#[derive(Default)]
pub(crate) struct FarthestFailure {
    pos: usize,
    expected: Vec<&'static str>,
}

impl FarthestFailure {
    /// Record that `label` was expected at `pos`.
    pub(crate) fn record(&mut self, pos: usize, label: &'static str) {
        if pos > self.pos {
            self.pos = pos;
            self.expected.clear();
        }
        if pos == self.pos && !self.expected.contains(&label) {
            self.expected.push(label);
        }
    }

    /// Build the error, reporting no earlier than the cursor's offset.
    pub(crate) fn into_error(self, cursor: &Cursor<'_>) -> ParseError {
        let (offset, expected) = if cursor.pos() > self.pos {
            (cursor.pos(), Vec::new())
        } else {
            (self.pos, self.expected)
        };
        let rest = cursor.source().get(offset..).unwrap_or("");
        let excerpt: String = rest
            .chars()
            .take_while(|c| !c.is_whitespace())
            .take(FOUND_EXCERPT_CHARS)
            .collect();
        let (found, len) = if rest.is_empty() {
            ("end of input".to_string(), 0)
        } else if excerpt.is_empty() {
            ("whitespace".to_string(), 1)
        } else {
            (format!("`{excerpt}`"), excerpt.len())
        };
        let (line, column) = cursor.line_col(offset);
        ParseError {
            span: Span::new(offset, offset + len),
            line,
            column,
            expected: Expected(expected),
            found,
        }
    }
}
