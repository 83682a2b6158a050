//! Expression grammar.
//!
//! ```text
//! expr   := INT | IDENT | lambda | letrec | if | call | seq
//! lambda := 'lambda' '(' IDENT* ')' '{' expr '}'
//! letrec := 'letrec' '(' (IDENT '=' expr)* ')' '{' expr '}'
//! if     := 'if' expr 'then' expr 'else' expr
//! call   := '(' INTRINSIC expr* ')' | '(' expr expr* ')'
//! seq    := '[' expr* ']'
//! ```

use std::collections::hash_map::Entry;

use expr_ir::{ExprId, ExprKind, Intrinsic, LetrecBinding, Name, Span, TokenKind};
use expr_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one expression.
    ///
    /// Nesting depth is bounded only by memory: each level goes through
    /// `ensure_sufficient_stack`.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Int(value) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(ExprKind::Int(value), span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(ExprKind::Var(name), span))
            }
            TokenKind::Lambda => self.parse_lambda(),
            TokenKind::Letrec => self.parse_letrec(),
            TokenKind::If => self.parse_if(),
            TokenKind::LParen => self.parse_call(),
            TokenKind::LBracket => self.parse_seq(),
            found => Err(ParseError::expected_expression(span, found)),
        }
    }

    /// `lambda (x y) { body }`
    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let open = self.cursor.expect(TokenKind::LParen)?.span;

        let mut params = Vec::new();
        while self.cursor.check_ident() {
            params.push(self.cursor.expect_ident()?);
        }
        self.cursor.expect_closing(TokenKind::RParen, '(', open)?;
        self.check_distinct(params.iter().copied());

        let body = self.parse_braced_body()?;
        let span = start.merge(self.cursor.previous_span());
        let params = self.arena.alloc_names(params.into_iter().map(|(name, _)| name));
        Ok(self.arena.alloc_expr(ExprKind::Lambda { params, body }, span))
    }

    /// `letrec (f = e g = e) { body }`
    fn parse_letrec(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let open = self.cursor.expect(TokenKind::LParen)?.span;

        let mut bindings = Vec::new();
        while self.cursor.check_ident() {
            let (name, name_span) = self.cursor.expect_ident()?;
            self.cursor.expect(TokenKind::Assign)?;
            let init = self.parse_expr()?;
            bindings.push(LetrecBinding {
                name,
                init,
                name_span,
            });
        }
        self.cursor.expect_closing(TokenKind::RParen, '(', open)?;
        self.check_distinct(bindings.iter().map(|b| (b.name, b.name_span)));

        let body = self.parse_braced_body()?;
        let span = start.merge(self.cursor.previous_span());
        let bindings = self.arena.alloc_bindings(bindings);
        Ok(self
            .arena
            .alloc_expr(ExprKind::Letrec { bindings, body }, span))
    }

    /// `{ expr }`
    fn parse_braced_body(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace)?.span;
        let body = self.parse_expr()?;
        self.cursor.expect_closing(TokenKind::RBrace, '{', open)?;
        Ok(body)
    }

    /// `if c then a else b`
    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::Then)?;
        let then_branch = self.parse_expr()?;
        self.cursor.expect(TokenKind::Else)?;
        let else_branch = self.parse_expr()?;
        let span = start.merge(self.arena.span(else_branch));
        Ok(self.arena.alloc_expr(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// `(op args...)` or `(callee args...)`
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;

        if let Some(op) = self.intrinsic_head() {
            self.cursor.advance();
            let args = self.parse_until(TokenKind::RParen, '(', open)?;
            let span = open.merge(self.cursor.previous_span());
            let args = self.arena.alloc_expr_list(args);
            return Ok(self.arena.alloc_expr(ExprKind::Intrinsic { op, args }, span));
        }

        if self.cursor.check(TokenKind::RParen) {
            return Err(ParseError::expected_expression(
                self.cursor.current_span(),
                TokenKind::RParen,
            )
            .with_context("a call needs a callee"));
        }

        let callee = self.parse_expr()?;
        let args = self.parse_until(TokenKind::RParen, '(', open)?;
        let span = open.merge(self.cursor.previous_span());
        let args = self.arena.alloc_expr_list(args);
        Ok(self.arena.alloc_expr(ExprKind::Call { callee, args }, span))
    }

    /// `[ exprs... ]`
    fn parse_seq(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let exprs = self.parse_until(TokenKind::RBracket, '[', open)?;
        let span = open.merge(self.cursor.previous_span());
        let exprs = self.arena.alloc_expr_list(exprs);
        Ok(self.arena.alloc_expr(ExprKind::Seq { exprs }, span))
    }

    /// Expressions up to and including the closing delimiter.
    fn parse_until(
        &mut self,
        close: TokenKind,
        open_char: char,
        open: Span,
    ) -> Result<Vec<ExprId>, ParseError> {
        let mut exprs = Vec::new();
        while !self.cursor.check(close) && !self.cursor.is_at_end() {
            exprs.push(self.parse_expr()?);
        }
        self.cursor.expect_closing(close, open_char, open)?;
        Ok(exprs)
    }

    /// The intrinsic named by the token after `(`, if any.
    fn intrinsic_head(&self) -> Option<Intrinsic> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => Intrinsic::from_name(self.cursor.interner().lookup(name)),
            kind => kind.operator_intrinsic(),
        }
    }

    /// Record an error for every name that repeats an earlier one.
    fn check_distinct(&mut self, names: impl Iterator<Item = (Name, Span)>) {
        let mut seen: FxHashMap<Name, Span> = FxHashMap::default();
        for (name, span) in names {
            match seen.entry(name) {
                Entry::Occupied(first) => {
                    let text = self.cursor.interner().lookup(name);
                    self.errors
                        .push(ParseError::duplicate_binding(text, span, *first.get()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(span);
                }
            }
        }
    }
}
