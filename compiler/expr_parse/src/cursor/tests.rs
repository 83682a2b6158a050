use super::*;
use expr_diagnostic::ErrorCode;

fn lex(source: &str, interner: &StringInterner) -> TokenList {
    expr_lexer::lex(source, interner)
}

#[test]
fn advance_stops_at_eof() {
    let interner = StringInterner::new();
    let tokens = lex("1", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);

    assert_eq!(cursor.advance().kind, TokenKind::Int(1));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
}

#[test]
fn check_ignores_payload() {
    let interner = StringInterner::new();
    let tokens = lex("7", &interner);
    let cursor = Cursor::new(&tokens, &interner);
    assert!(cursor.check(TokenKind::Int(0)));
    assert!(!cursor.check(TokenKind::LParen));
}

#[test]
fn expect_reports_found_token() {
    let interner = StringInterner::new();
    let tokens = lex("]", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);
    let err = cursor.expect(TokenKind::RParen).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1001);
    assert!(err.message.contains("`]`"), "{}", err.message);
}

#[test]
fn expect_closing_at_eof_is_unclosed() {
    let interner = StringInterner::new();
    let tokens = lex("", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);
    let err = cursor
        .expect_closing(TokenKind::RParen, '(', Span::new(0, 1))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::E1003);
}

#[test]
fn expect_ident_returns_name_and_span() {
    let interner = StringInterner::new();
    let tokens = lex("  abc", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);
    let (name, span) = cursor.expect_ident().unwrap();
    assert_eq!(interner.lookup(name), "abc");
    assert_eq!(span, Span::new(2, 5));
    assert_eq!(cursor.previous_span(), span);
}
