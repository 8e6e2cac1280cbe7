//! Destination for `print` output.
//!
//! The CLI writes to stdout; tests and embedders capture into a buffer.
//! Dispatch is a plain `match` over [`PrintHandlerImpl`].

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes each printed line to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, line: &str) {
        println!("{line}");
    }

    /// Flush buffered stdout, at the end of a run.
    pub fn flush(&self) {
        // A closed stdout has nowhere to report to.
        let _ = std::io::stdout().flush();
    }
}

/// Collects printed lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return everything printed so far and empty the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// The print handler an interpreter writes to.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures into a buffer.
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Emit one printed line.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drain captured output; empty for handlers that do not capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }

    pub fn flush(&self) {
        if let Self::Stdout(h) = self {
            h.flush();
        }
    }
}

/// Print handler shared between an interpreter and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
