//! Print handlers for demo output.
//!
//! The report and its diagnostics can be directed to different destinations:
//! - Native: stdout for the report, stderr for diagnostics (default)
//! - Tests: separate buffers for assertions
//! - Silent: discard everything
//!
//! Uses enum dispatch instead of trait objects.

use std::sync::Arc;

use parking_lot::Mutex;

/// Handler that writes the report to stdout and diagnostics to stderr.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a report line.
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print a diagnostic line.
    pub fn eprintln(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Handler that captures report and diagnostic lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    output: Mutex<String>,
    errors: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create an empty buffer handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report line.
    pub fn println(&self, msg: &str) {
        push_line(&self.output, msg);
    }

    /// Append a diagnostic line.
    pub fn eprintln(&self, msg: &str) {
        push_line(&self.errors, msg);
    }

    /// Captured report text.
    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    /// Captured diagnostic text.
    pub fn get_errors(&self) -> String {
        self.errors.lock().clone()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.output.lock().clear();
        self.errors.lock().clear();
    }
}

fn push_line(buffer: &Mutex<String>, msg: &str) {
    let mut buf = buffer.lock();
    buf.push_str(msg);
    buf.push('\n');
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout/stderr (default).
    Stdout(StdoutPrintHandler),
    /// Captures to buffers (testing).
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a report line.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Print a diagnostic line.
    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.eprintln(msg),
            Self::Buffer(h) => h.eprintln(msg),
            Self::Silent => {}
        }
    }

    /// Captured report text.
    ///
    /// Empty for handlers that don't capture (stdout, silent).
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured diagnostic text.
    ///
    /// Empty for handlers that don't capture (stdout, silent).
    pub fn get_errors(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_errors(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Clear captured output. No-op for stdout and silent.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a silent print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
