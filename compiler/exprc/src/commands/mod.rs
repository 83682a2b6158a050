//! Command handlers for the `expr` CLI.
//!
//! Each submodule implements one command. `read_file` and
//! `report_diagnostics` are shared.

use expr_diagnostic::emitter::{ColorMode, TerminalEmitter};
use expr_diagnostic::Diagnostic;

mod debug;
mod run;

pub use debug::{format_ast, lex_file, parse_file};
pub use run::{run_file, RunFlags};

/// Read a source file, exiting with a message if it cannot be read.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Render `diagnostics` to stderr against `source`, followed by a summary.
pub(super) fn report_diagnostics(diagnostics: &[Diagnostic], path: &str, source: &str) {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter =
        TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(path, source);
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors);
    emitter.flush();
}
