//! Expr driver: source text in, value or diagnostics out.
//!
//! The pipeline is lex, parse, evaluate. Front-end problems are collected
//! and reported together; evaluation only starts on a clean program, and
//! stops at the first runtime error.

pub mod commands;
pub mod problem;

use expr_diagnostic::Diagnostic;
use expr_eval::{
    stdin_handler, stdout_handler, InterpreterBuilder, RuntimeConfig, SharedInputHandler,
    SharedPrintHandler, Value,
};
use expr_ir::StringInterner;
use expr_parse::ParseOutput;

/// Result of the front end.
pub struct Frontend {
    pub interner: StringInterner,
    pub parsed: ParseOutput,
    /// Lex and parse problems, in source order per phase.
    pub diagnostics: Vec<Diagnostic>,
}

impl Frontend {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Lex and parse `source`.
///
/// Invalid characters are reported once, by the lexer; the parser's
/// matching "invalid token" errors are dropped.
pub fn check_source(source: &str) -> Frontend {
    let interner = StringInterner::new();
    let (tokens, lex_errors) = expr_lexer::lex_with_errors(source, &interner);
    let parsed = expr_parse::parse(&tokens, &interner);

    let had_lex_errors = !lex_errors.is_empty();
    let mut diagnostics: Vec<Diagnostic> = lex_errors
        .into_iter()
        .map(|err| problem::lex_error_to_diagnostic(err, source))
        .collect();
    diagnostics.extend(
        parsed
            .errors
            .iter()
            .filter(|err| !(had_lex_errors && err.code.is_lexer_error()))
            .map(expr_parse::ParseError::to_diagnostic),
    );

    Frontend {
        interner,
        parsed,
        diagnostics,
    }
}

/// Where a run's I/O goes and how it is limited.
pub struct RunOptions {
    pub print: SharedPrintHandler,
    pub input: SharedInputHandler,
    pub config: RuntimeConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            print: stdout_handler(),
            input: stdin_handler(),
            config: RuntimeConfig::default(),
        }
    }
}

/// Lex, parse and evaluate `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(source: &str, options: RunOptions) -> Result<Value, Vec<Diagnostic>> {
    let frontend = check_source(source);
    if frontend.has_errors() {
        tracing::debug!(
            errors = frontend.diagnostics.len(),
            "front end failed, not evaluating"
        );
        return Err(frontend.diagnostics);
    }
    let Some(root) = frontend.parsed.root else {
        return Err(vec![problem::internal_error("parser produced no program")]);
    };

    let mut interpreter = InterpreterBuilder::new(&frontend.interner, &frontend.parsed.arena)
        .print_handler(options.print)
        .input_handler(options.input)
        .config(options.config)
        .build();
    interpreter
        .run(root)
        .map_err(|err| vec![problem::eval_error_to_diagnostic(&err)])
}
