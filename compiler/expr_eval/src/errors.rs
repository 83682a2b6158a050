//! Runtime errors.
//!
//! Every runtime error is fatal: evaluation stops and the error travels up
//! to the caller of `Interpreter::run` unchanged. Errors are built by the
//! `#[cold]` factory functions below; the interpreter then attaches the span
//! of the failing node and a backtrace of the active calls.

use std::fmt;

use expr_ir::{Intrinsic, Span};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },

    #[error("{context} expects {expected}, found {found}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("cannot call a value of kind {found}")]
    NotCallable { found: &'static str },

    #[error("{name} takes {expected} argument{} but got {got}", plural(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("intrinsic `{op}` takes {expected} argument{} but got {got}", plural(.expected))]
    IntrinsicArity {
        op: Intrinsic,
        expected: usize,
        got: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("remainder by zero")]
    ModuloByZero,

    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: Intrinsic },

    #[error("program called `error`")]
    UserError,

    #[error("internal fault: {message}")]
    InternalFault { message: String },

    #[error("call depth limit of {depth} exceeded")]
    StackOverflow { depth: usize },

    #[error("input/output error: {message}")]
    Io { message: String },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// One active call at the time of an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Callee name, or `<anonymous>` when the callee was not a variable.
    pub name: String,
    /// Call site.
    pub span: Option<Span>,
}

/// Snapshot of the call stack, most recent call first.
///
/// Holds at most the innermost frames a capture kept; `depth` counts every
/// call that was active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
    depth: usize,
}

impl EvalBacktrace {
    /// A backtrace that kept every frame.
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        let depth = frames.len();
        Self { frames, depth }
    }

    /// A backtrace that kept `frames` out of `depth` active calls.
    pub fn truncated(frames: Vec<BacktraceFrame>, depth: usize) -> Self {
        let depth = depth.max(frames.len());
        Self { frames, depth }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// Number of calls active when the backtrace was taken.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Active calls that were not kept.
    pub fn hidden(&self) -> usize {
        self.depth.saturating_sub(self.frames.len())
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
            writeln!(f)?;
        }
        if self.hidden() > 0 {
            writeln!(f, "  ... {} more", self.hidden())?;
        }
        Ok(())
    }
}

/// A fatal runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// The node being evaluated when the error was raised.
    pub span: Option<Span>,
    pub backtrace: Option<EvalBacktrace>,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for EvalError {}

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

// Lookup

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

// Kinds

#[cold]
pub fn type_mismatch(context: impl Into<String>, expected: &'static str, found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        found,
    })
}

#[cold]
pub fn not_callable(found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { found })
}

// Arity

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn intrinsic_arity(op: Intrinsic, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntrinsicArity {
        op,
        expected: op.arity(),
        got,
    })
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(op: Intrinsic) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { op })
}

// Termination

#[cold]
pub fn user_error() -> EvalError {
    EvalError::from_kind(EvalErrorKind::UserError)
}

#[cold]
pub fn internal_fault(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InternalFault {
        message: message.into(),
    })
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

#[cold]
pub fn io_error(err: &std::io::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Io {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
