//! Byte cursor over the source text.
//!
//! The grammar is scannerless: each rule consumes whitespace and literals
//! directly through this cursor. All terminals of the language are ASCII,
//! so matching is byte-wise; non-ASCII text can only appear inside string
//! literals, whose delimiters (`"` and `\`) never occur inside a UTF-8
//! continuation byte.

/// Cursor for navigating source bytes.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor back to a previously observed offset.
    ///
    /// Used by speculative parsing to roll back a failed alternative.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.source.len(), "cursor position {pos} out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Byte `n` positions ahead of the current one.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + n).copied()
    }

    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or("")
    }

    /// Source text between two offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or("")
    }

    /// Whether the unconsumed input starts with `text`.
    #[inline]
    pub fn at(&self, text: &str) -> bool {
        self.source.as_bytes()[self.pos.min(self.source.len())..].starts_with(text.as_bytes())
    }

    /// Consume `text` if the input starts with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if self.at(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds, returning the consumed text.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
        self.slice(start, self.pos)
    }

    /// Skip spaces, tabs, carriage returns and newlines.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// 1-based line and column of a byte offset.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let before = self.source.get(..offset).unwrap_or(self.source);
        let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
pub(crate) fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

#[inline]
pub(crate) fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}
