use super::*;

#[test]
fn display_matches_variant_name() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E6009.to_string(), "E6009");
    assert_eq!(ErrorCode::E9001.to_string(), "E9001");
}

#[test]
fn phase_predicates() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(ErrorCode::E0003.is_lexer_error());
    assert!(ErrorCode::E1003.is_parser_error());
    assert!(!ErrorCode::E2001.is_parser_error());
    assert!(ErrorCode::E6004.is_runtime_error());
    assert!(!ErrorCode::E9001.is_runtime_error());
}
