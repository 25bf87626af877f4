//! Destinations for `print` output.
//!
//! Each `print` writes the value's display text followed by a newline.
//! Where that line goes is chosen by the host:
//! - stdout (default)
//! - an in-memory buffer, for tests and embedders that inspect output
//! - nowhere, when output is irrelevant
//!
//! Dispatch is an enum match, not a trait object; the set of sinks is closed.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Value;

/// Writes each line to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Write one line, ignoring a closed stdout.
    pub fn println(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        if let Err(err) = writeln!(lock, "{line}") {
            tracing::warn!(%err, "failed to write print output");
        }
    }
}

/// Captures lines into a shared buffer.
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

    /// Everything captured so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return the captured text and reset the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

/// A `print` sink.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Drops every line.
    Silent,
}

impl PrintHandlerImpl {
    /// Emit the display text of `value` as one line.
    pub fn print_value(&self, value: &Value) {
        self.println(&value.display_value());
    }

    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for sinks that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drain captured output; empty for sinks that do not capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Print sink shared between an interpreter and the function activations it
/// spawns, and with the host that reads the output back.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
