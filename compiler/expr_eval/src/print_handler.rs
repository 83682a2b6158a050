//! Where `put` output and runtime diagnostics go.
//!
//! - Stdout: program output to stdout, diagnostics to stderr (the CLI)
//! - Buffer: both captured separately (tests and embedders)
//! - Silent: both discarded
//!
//! Enum dispatch rather than trait objects: this sits on the `put` path.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to the process's standard streams.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn diagnostic(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Captures program output and diagnostics in two buffers.
#[derive(Default)]
pub struct BufferPrintHandler {
    output: Mutex<String>,
    diagnostics: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn diagnostic(&self, msg: &str) {
        let mut buf = self.diagnostics.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    pub fn get_diagnostics(&self) -> String {
        self.diagnostics.lock().clone()
    }

    pub fn clear(&self) {
        self.output.lock().clear();
        self.diagnostics.lock().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    /// Program output, one line.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Diagnostic stream, one line. Not part of the program's output.
    pub fn diagnostic(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.diagnostic(msg),
            Self::Buffer(h) => h.diagnostic(msg),
            Self::Silent => {}
        }
    }

    /// Captured program output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured diagnostics; empty for handlers that do not capture.
    pub fn get_diagnostics(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_diagnostics(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between the interpreter and whoever reads the output.
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
