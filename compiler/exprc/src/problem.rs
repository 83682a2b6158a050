//! Conversion of lex and runtime errors into diagnostics.
//!
//! Lives here rather than next to the error types: `expr_eval` does not
//! depend on `expr_diagnostic`.
//!
//! # Runtime error codes (E6xxx)
//!
//! - E6001: unbound variable
//! - E6002–E6005: kind and arity errors
//! - E6006–E6008: arithmetic
//! - E6009: `error` intrinsic
//! - E6010: call depth limit
//! - E6011: input/output
//! - E9001: internal fault

use expr_diagnostic::{Diagnostic, ErrorCode};
use expr_eval::{EvalBacktrace, EvalError, EvalErrorKind};
use expr_lexer::LexError;

pub fn lex_error_to_diagnostic(err: LexError, source: &str) -> Diagnostic {
    let slice = source
        .get(err.span.start as usize..err.span.end as usize)
        .unwrap_or("");
    err.into_diagnostic(slice)
}

/// Convert an `EvalError` into a diagnostic.
///
/// Each backtrace frame with a call site becomes a secondary label.
pub fn eval_error_to_diagnostic(err: &EvalError) -> Diagnostic {
    let code = error_code_for_kind(&err.kind);
    let mut diag = Diagnostic::error(code).with_message(err.to_string());

    if let Some(span) = err.span {
        diag = diag.with_label(span, label_for_kind(&err.kind));
    }

    if let Some(backtrace) = &err.backtrace {
        diag = add_backtrace(diag, backtrace);
    }

    if let Some(suggestion) = suggestion_for_kind(&err.kind) {
        diag = diag.with_suggestion(suggestion);
    }

    diag
}

fn add_backtrace(mut diag: Diagnostic, backtrace: &EvalBacktrace) -> Diagnostic {
    for (i, frame) in backtrace.frames().iter().enumerate() {
        let callee = if frame.name.starts_with('<') {
            frame.name.clone()
        } else {
            format!("`{}`", frame.name)
        };
        diag = match frame.span {
            Some(span) => diag.with_secondary_label(span, format!("frame {i}: call to {callee}")),
            None => diag.with_note(format!("frame {i}: call to {callee}")),
        };
    }
    let hidden = backtrace.hidden();
    if hidden > 0 {
        diag = diag.with_note(format!(
            "{hidden} older call{} not shown",
            if hidden == 1 { "" } else { "s" }
        ));
    }
    diag
}

/// Diagnostic for a broken driver invariant.
pub fn internal_error(message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001).with_message(format!("internal error: {message}"))
}

pub(crate) fn error_code_for_kind(kind: &EvalErrorKind) -> ErrorCode {
    match kind {
        EvalErrorKind::UnboundVariable { .. } => ErrorCode::E6001,
        EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6002,
        EvalErrorKind::NotCallable { .. } => ErrorCode::E6003,
        EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6004,
        EvalErrorKind::IntrinsicArity { .. } => ErrorCode::E6005,
        EvalErrorKind::DivisionByZero => ErrorCode::E6006,
        EvalErrorKind::ModuloByZero => ErrorCode::E6007,
        EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6008,
        EvalErrorKind::UserError => ErrorCode::E6009,
        EvalErrorKind::StackOverflow { .. } => ErrorCode::E6010,
        EvalErrorKind::Io { .. } => ErrorCode::E6011,
        EvalErrorKind::InternalFault { .. } => ErrorCode::E9001,
    }
}

fn label_for_kind(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::UnboundVariable { .. } => "not found in this scope",
        EvalErrorKind::TypeMismatch { .. } => "wrong kind of value",
        EvalErrorKind::NotCallable { .. } => "not a closure",
        EvalErrorKind::ArityMismatch { .. } | EvalErrorKind::IntrinsicArity { .. } => {
            "wrong number of arguments"
        }
        EvalErrorKind::DivisionByZero => "division by zero here",
        EvalErrorKind::ModuloByZero => "remainder by zero here",
        EvalErrorKind::IntegerOverflow { .. } => "overflow occurred here",
        EvalErrorKind::UserError => "program stopped here",
        EvalErrorKind::StackOverflow { .. } => "call depth limit reached here",
        EvalErrorKind::Io { .. } => "while reading input",
        EvalErrorKind::InternalFault { .. } => "while evaluating this",
    }
}

fn suggestion_for_kind(kind: &EvalErrorKind) -> Option<String> {
    match kind {
        EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => {
            Some("check the divisor with `(== d 0)` before dividing".to_string())
        }
        EvalErrorKind::UnboundVariable { name } => {
            Some(format!("bind `{name}` with `letrec ({name} = ...) {{ ... }}`"))
        }
        EvalErrorKind::StackOverflow { .. } => {
            Some("raise the limit with `--max-depth=N`, or omit it".to_string())
        }
        EvalErrorKind::InternalFault { .. } => {
            Some("this is a bug in the interpreter; please report it".to_string())
        }
        _ => None,
    }
}
