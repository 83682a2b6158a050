//! Front-end problems stop the run before evaluation.

use expr_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use crate::common::run;

#[test]
fn invalid_character_is_reported_once() {
    let outcome = run("(+ 1 $)");
    assert_eq!(outcome.codes(), vec![ErrorCode::E0001]);
}

#[test]
fn oversized_literal() {
    let outcome = run("(+ 1 99999999999999999999)");
    assert_eq!(outcome.codes(), vec![ErrorCode::E0002]);
}

#[test]
fn unclosed_paren() {
    assert_eq!(run("(+ 1 2").codes(), vec![ErrorCode::E1003]);
}

#[test]
fn trailing_input() {
    assert_eq!(run("1 2").codes(), vec![ErrorCode::E1005]);
}

#[test]
fn empty_program() {
    assert_eq!(run("").codes(), vec![ErrorCode::E1002]);
}

#[test]
fn duplicate_names_are_rejected_before_running() {
    let outcome = run("[ (put 1) lambda (x x) { x } ]");
    assert_eq!(outcome.codes(), vec![ErrorCode::E2001]);
    assert_eq!(outcome.output, "");

    let outcome = run("letrec (a = 1 a = 2) { a }");
    assert_eq!(outcome.codes(), vec![ErrorCode::E2001]);
}

#[test]
fn comments_and_whitespace_are_ignored() {
    let outcome = run("# leading comment\n(+ 1 # inline\n 2)\n");
    assert_eq!(outcome.value().to_string(), "3");
}
