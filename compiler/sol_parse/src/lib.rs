//! Scannerless recursive descent parser for Sol.
//!
//! The grammar is a PEG: alternatives are tried in order, and a failed
//! alternative rolls the cursor back before the next one is tried. There is
//! no token stream; whitespace and literals are consumed inline by each rule
//! and AST nodes are built as rules succeed.
//!
//! Precedence, loosest first: comparison, additive, multiplicative, primary.
//! All three binary levels fold to the left, including comparison, so
//! `a < b < c` compares the *result* of `a < b` with `c`.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{Expected, ParseError};

use error::FarthestFailure;
use sol_ir::{Name, Stmt};
use tracing::{debug, trace};

use cursor::{is_ident_continue, is_ident_start};

/// Parse a whole program into its top-level statements.
pub fn parse(source: &str) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(source).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    failure: FarthestFailure,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(source),
            failure: FarthestFailure::default(),
        }
    }

    /// `program = stmt* ws EOF`
    pub fn parse_program(mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        loop {
            let start = self.cursor.pos();
            let Some(stmt) = self.speculate(Self::statement) else {
                break;
            };
            trace!(start, end = self.cursor.pos(), "parsed top-level statement");
            stmts.push(stmt);
        }
        self.ws();
        if !self.cursor.is_eof() {
            self.failure.record(self.cursor.pos(), "statement");
            return Err(self.failure.into_error(&self.cursor));
        }
        debug!(count = stmts.len(), "parse complete");
        Ok(stmts)
    }

    /// Run `rule`, restoring the cursor if it fails.
    #[inline]
    fn speculate<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.cursor.pos();
        let result = rule(self);
        if result.is_none() {
            self.cursor.set_pos(start);
        }
        result
    }

    /// Record a failed expectation at the current offset.
    #[inline]
    fn expected<T>(&mut self, label: &'static str) -> Option<T> {
        self.failure.record(self.cursor.pos(), label);
        None
    }

    fn ws(&mut self) {
        self.cursor.eat_whitespace();
    }

    /// Match a punctuation terminal such as `;` or `(`.
    fn punct(&mut self, text: &'static str, label: &'static str) -> Option<()> {
        if self.cursor.eat_str(text) {
            Some(())
        } else {
            self.expected(label)
        }
    }

    /// Match a keyword that is not immediately followed by an identifier
    /// character, so `trueish` and `printx` stay identifiers.
    fn keyword(&mut self, word: &'static str, label: &'static str) -> Option<()> {
        let boundary = self
            .cursor
            .peek(word.len())
            .map_or(true, |b| !is_ident_continue(b));
        if boundary && self.cursor.eat_str(word) {
            Some(())
        } else {
            self.expected(label)
        }
    }

    /// `identifier = letter (letter | digit)*`
    fn identifier(&mut self) -> Option<Name> {
        if !self.cursor.current().is_some_and(is_ident_start) {
            return self.expected("identifier");
        }
        Some(Name::new(self.cursor.eat_while(is_ident_continue)))
    }
}

#[cfg(test)]
mod tests;
