//! Token navigation for the parser.

use crate::ParseError;
use expr_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use std::mem::discriminant;

/// Position in a `TokenList`. Never moves past the trailing `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.iter().last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Whether the current token has the same kind as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        discriminant(&self.current_kind()) == discriminant(&kind)
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Move to the next token, returning the one just passed.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the given kind or fail without moving.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                self.current_span(),
                kind.describe(),
                self.current_kind(),
            ))
        }
    }

    /// Consume the closing delimiter matching an opener at `open_span`.
    pub fn expect_closing(
        &mut self,
        kind: TokenKind,
        open: char,
        open_span: Span,
    ) -> Result<Token, ParseError> {
        if self.is_at_end() && !self.check(kind) {
            return Err(ParseError::unclosed(open, open_span, self.current_span()));
        }
        self.expect(kind)
    }

    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            found => Err(ParseError::expected_ident(self.current_span(), found)),
        }
    }
}

#[cfg(test)]
mod tests;
