//! Print handler for configurable output.
//!
//! `print` is the language's only I/O surface. The handler lets the
//! host direct that output: stdout (default), a buffer for capture in
//! tests or an embedding host, or nowhere.
//!
//! Enum dispatch is used instead of trait objects: the destination set
//! is closed, and static dispatch keeps this frequently-hit path cheap.

use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for `print` output.
pub enum PrintHandler {
    /// Writes to stdout (default).
    Stdout,
    /// Captures lines into a buffer.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// All captured output; empty for destinations that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandler>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

/// Create a silent print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
