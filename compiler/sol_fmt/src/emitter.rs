//! Output Emitter
//!
//! Abstraction for output production during formatting.

/// Trait for emitting formatted output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation for `level` nesting levels.
    fn emit_indent(&mut self, level: usize);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// String-based emitter for in-memory formatting.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    #[inline]
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    #[inline]
    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level * crate::INDENT_WIDTH {
            self.buffer.push(' ');
        }
    }

    #[inline]
    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}
