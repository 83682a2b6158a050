//! Lexer for Expr using logos with string interning.

mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use expr_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
enum RawToken {
    // Keywords
    #[token("lambda")]
    Lambda,
    #[token("letrec")]
    Letrec,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("=")]
    Assign,

    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // A sign glued to digits is part of the literal: `-5` is one token,
    // `- 5` is two.
    #[regex(r"[+-]?[0-9]+", |lex| {
        lex.slice().parse::<i64>().map_err(|_| LexErrorKind::IntegerOverflow)
    })]
    Int(i64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Lex source into tokens, dropping error details.
///
/// Rejected input still produces `TokenKind::Error` tokens, so the parser can
/// report them in place. Use [`lex_with_errors`] to get the reasons.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    lex_with_errors(source, interner).0
}

/// Lex source into tokens plus one `LexError` per `Error` token.
///
/// A source too large for `u32` offsets yields a single `Error` token and
/// one `SourceTooLarge` error without being scanned.
pub fn lex_with_errors(source: &str, interner: &StringInterner) -> (TokenList, Vec<LexError>) {
    let mut result = TokenList::new();
    let eof_pos = match end_offset(source.len()) {
        Ok(pos) => pos,
        Err(err) => {
            result.push(Token::new(TokenKind::Error, err.span));
            result.push(Token::new(TokenKind::Eof, Span::point(u32::MAX)));
            return (result, vec![err]);
        }
    };
    let mut errors = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());

        match token_result {
            Ok(raw) => {
                let kind = convert_token(raw, logos.slice(), interner);
                result.push(Token::new(kind, span));
            }
            Err(kind) => {
                errors.push(LexError { kind, span });
                result.push(Token::new(TokenKind::Error, span));
            }
        }
    }

    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    (result, errors)
}

/// Offset of the end of a source of `len` bytes.
fn end_offset(len: usize) -> Result<u32, LexError> {
    u32::try_from(len).map_err(|_| LexError {
        kind: LexErrorKind::SourceTooLarge { len },
        span: Span::point(0),
    })
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::Lambda => TokenKind::Lambda,
        RawToken::Letrec => TokenKind::Letrec,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Assign => TokenKind::Assign,

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
    }
}
