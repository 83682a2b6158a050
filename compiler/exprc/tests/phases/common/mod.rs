//! Run programs with buffered I/O.

use expr_diagnostic::emitter::{ColorMode, TerminalEmitter};
use expr_diagnostic::{Diagnostic, ErrorCode};
use expr_eval::{buffer_handler, buffer_input, RuntimeConfig, Value};
use exprc::{run_source, RunOptions};

/// Everything a run produced.
pub struct Outcome {
    pub result: Result<Value, Vec<Diagnostic>>,
    pub output: String,
    pub diagnostics: String,
}

impl Outcome {
    pub fn value(&self) -> &Value {
        match &self.result {
            Ok(value) => value,
            Err(diags) => panic!("program failed: {diags:#?}"),
        }
    }

    /// Error codes of a failed run, in order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        match &self.result {
            Ok(value) => panic!("program succeeded with {value}"),
            Err(diags) => diags.iter().map(|d| d.code).collect(),
        }
    }
}

pub fn run_configured(source: &str, input: &str, config: RuntimeConfig) -> Outcome {
    let print = buffer_handler();
    let options = RunOptions {
        print: print.clone(),
        input: buffer_input(input),
        config,
    };
    let result = run_source(source, options);
    Outcome {
        result,
        output: print.get_output(),
        diagnostics: print.get_diagnostics(),
    }
}

pub fn run_with_input(source: &str, input: &str) -> Outcome {
    run_configured(source, input, RuntimeConfig::default())
}

pub fn run(source: &str) -> Outcome {
    run_with_input(source, "")
}

/// Render diagnostics without color, as the CLI would for `path`.
pub fn render(diagnostics: &[Diagnostic], path: &str, source: &str) -> String {
    let mut buf = Vec::new();
    {
        let mut emitter =
            TerminalEmitter::with_color_mode(&mut buf, ColorMode::Never, false)
                .with_source(path, source);
        emitter.emit_all(diagnostics);
        emitter.flush();
    }
    String::from_utf8(buf).unwrap()
}
