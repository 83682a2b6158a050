//! Diagnostic system for Expr.
//!
//! Every failure the toolchain reports (bad token, malformed syntax,
//! duplicate binding, runtime fault) becomes a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary span saying where
//! - secondary labels for related places (runtime call sites land here)
//! - notes for context

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{
    duplicate_binding, expected_expression, unclosed_delimiter, unexpected_token, Diagnostic,
    Label, Severity,
};
pub use error_code::ErrorCode;
