//! Parse error types.

use expr_diagnostic::{Diagnostic, ErrorCode};
use expr_ir::{Span, TokenKind};

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Label text at `span`.
    pub context: Option<String>,
    /// A related location, e.g. where an unclosed delimiter opened.
    pub related: Option<(Span, String)>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            related: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    #[cold]
    pub fn unexpected(span: Span, expected: &str, found: TokenKind) -> Self {
        if found == TokenKind::Error {
            return ParseError::invalid_token(span);
        }
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", found.describe()),
            span,
        )
        .with_context(format!("expected {expected}"))
    }

    #[cold]
    pub fn expected_expression(span: Span, found: TokenKind) -> Self {
        if found == TokenKind::Error {
            return ParseError::invalid_token(span);
        }
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {}", found.describe()),
            span,
        )
        .with_context("expected expression")
    }

    #[cold]
    pub fn unclosed(open: char, open_span: Span, eof_span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1003,
            format!("unclosed delimiter `{open}`"),
            eof_span,
        )
        .with_context("input ends here")
        .with_related(open_span, "unclosed delimiter opened here")
    }

    #[cold]
    pub fn expected_ident(span: Span, found: TokenKind) -> Self {
        ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found {}", found.describe()),
            span,
        )
    }

    #[cold]
    pub fn trailing_input(span: Span, found: TokenKind) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("unexpected {} after the end of the program", found.describe()),
            span,
        )
        .with_context("a program is a single expression")
    }

    #[cold]
    pub fn invalid_token(span: Span) -> Self {
        ParseError::new(ErrorCode::E0001, "invalid token", span)
    }

    #[cold]
    pub fn duplicate_binding(name: &str, span: Span, first: Span) -> Self {
        ParseError::new(
            ErrorCode::E2001,
            format!("`{name}` is bound more than once in the same scope"),
            span,
        )
        .with_context("rebound here")
        .with_related(first, "first bound here")
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));
        if let Some((span, message)) = &self.related {
            diag = diag.with_secondary_label(*span, message);
        }
        diag
    }
}
