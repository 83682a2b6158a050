use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Span::new(0, 5), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes, vec!["some context".to_string()]);
    assert_eq!(diag.suggestions, vec!["try this".to_string()]);
}

#[test]
fn primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_secondary_label(Span::new(0, 1), "opened")
        .with_label(Span::new(9, 9), "eof");
    assert_eq!(diag.primary_span(), Some(Span::new(9, 9)));
}

#[test]
fn unclosed_delimiter_has_two_labels() {
    let diag = unclosed_delimiter(Span::new(0, 1), Span::new(10, 10), '(');

    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert!(diag.message.contains('('));
}

#[test]
fn duplicate_binding_names_the_variable() {
    let diag = duplicate_binding(Span::new(12, 13), Span::new(8, 9), "x");
    assert_eq!(diag.code, ErrorCode::E2001);
    assert!(diag.message.contains("`x`"));
    assert_eq!(diag.primary_span(), Some(Span::new(12, 13)));
}

#[test]
fn display_is_single_block() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("unbound variable `y`")
        .with_label(Span::new(3, 4), "not found")
        .with_note("in call to `f`");

    assert_eq!(
        diag.to_string(),
        "error[E6001]: unbound variable `y`\n  --> 3..4: not found\n  = note: in call to `f`"
    );
}

#[test]
fn warning_is_not_error() {
    assert!(!Diagnostic::warning(ErrorCode::E0001).is_error());
}
