use expr_diagnostic::{Diagnostic, ErrorCode};
use expr_ir::Span;

/// Why logos rejected a stretch of input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, thiserror::Error)]
pub enum LexErrorKind {
    #[default]
    #[error("invalid character in source")]
    InvalidCharacter,
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,
    #[error("source of {len} bytes exceeds the 4 GiB limit")]
    SourceTooLarge { len: usize },
}

/// A lexical error with its location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn into_diagnostic(self, slice: &str) -> Diagnostic {
        match self.kind {
            LexErrorKind::InvalidCharacter => Diagnostic::error(ErrorCode::E0001)
                .with_message(format!("invalid character `{slice}`"))
                .with_label(self.span, "not valid in Expr source"),
            LexErrorKind::IntegerOverflow => Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("integer literal `{slice}` is out of range"))
                .with_label(self.span, "does not fit in a 64-bit signed integer")
                .with_note(format!("integers range from {} to {}", i64::MIN, i64::MAX)),
            LexErrorKind::SourceTooLarge { len } => Diagnostic::error(ErrorCode::E0003)
                .with_message(format!("source file is too large ({len} bytes)"))
                .with_note(format!("at most {} bytes can be lexed", u32::MAX)),
        }
    }
}
