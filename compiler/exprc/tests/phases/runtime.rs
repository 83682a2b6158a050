//! Language semantics, observed through the driver.

use expr_diagnostic::ErrorCode;
use expr_eval::{RuntimeConfig, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::{run, run_configured, run_with_input};

const FACT: &str = include_str!("../programs/fact.expr");
const GC: &str = include_str!("../programs/gc.expr");
const MUTUAL: &str = include_str!("../programs/mutual.expr");

#[test]
fn factorial_program() {
    let outcome = run_with_input(FACT, "3\n5 0 10\n");
    assert_eq!(outcome.value(), &Value::Void);
    assert_eq!(outcome.output, "120\n1\n3628800\n");
}

#[test]
fn gc_program() {
    let outcome = run(GC);
    assert_eq!(outcome.value(), &Value::Int(15));
    assert_eq!(outcome.output, "6\n");
    assert_eq!(
        outcome.diagnostics,
        "[Expr Runtime] GC collected 11 locations\n"
    );
}

#[test]
fn mutual_recursion_program() {
    let outcome = run(MUTUAL);
    assert_eq!(outcome.value(), &Value::Int(0));
    assert_eq!(outcome.output, "1\n1\n");
}

#[test]
fn shadowing() {
    let outcome = run("letrec (x = 1) { letrec (x = 2) { x } }");
    assert_eq!(outcome.value(), &Value::Int(2));
}

#[test]
fn if_short_circuits() {
    let outcome = run("if 1 then 42 else (error)");
    assert_eq!(outcome.value(), &Value::Int(42));
}

#[test]
fn sequence_prints_in_order() {
    let outcome = run("[ (put 1) (put 2) 3 ]");
    assert_eq!(outcome.value(), &Value::Int(3));
    assert_eq!(outcome.output, "1\n2\n");
}

#[test]
fn empty_sequence_renders_as_void() {
    assert_eq!(run("[]").value().to_string(), "<void>");
}

#[test]
fn closure_result_renders_as_placeholder() {
    assert_eq!(run("lambda (x) { x }").value().to_string(), "<closure>");
}

#[test]
fn repeated_collection_reclaims_nothing_new() {
    let outcome = run("letrec (f = lambda (a) { a }) { [ (f 1) (gc) (gc) ] }");
    assert_eq!(
        outcome.diagnostics,
        "[Expr Runtime] GC collected 1 locations\n[Expr Runtime] GC collected 0 locations\n"
    );
}

#[test]
fn runtime_errors_have_codes() {
    let cases = [
        ("x", ErrorCode::E6001),
        ("(+ 1 lambda () { 1 })", ErrorCode::E6002),
        ("(5)", ErrorCode::E6003),
        ("(lambda (a) { a })", ErrorCode::E6004),
        ("(not 1 2)", ErrorCode::E6005),
        ("(/ 1 0)", ErrorCode::E6006),
        ("(% 1 0)", ErrorCode::E6007),
        ("(* 9223372036854775807 2)", ErrorCode::E6008),
        ("(error)", ErrorCode::E6009),
    ];
    for (source, code) in cases {
        assert_eq!(run(source).codes(), vec![code], "program: {source}");
    }
}

#[test]
fn depth_limit_from_config() {
    let config = RuntimeConfig {
        max_call_depth: Some(100),
        ..RuntimeConfig::default()
    };
    let source = "letrec (f = lambda (n) { (f n) }) { (f 0) }";
    let outcome = run_configured(source, "", config);
    assert_eq!(outcome.codes(), vec![ErrorCode::E6010]);
}

#[test]
fn output_before_an_error_is_kept() {
    let outcome = run("[ (put 7) (/ 1 0) ]");
    assert_eq!(outcome.output, "7\n");
    assert_eq!(outcome.codes(), vec![ErrorCode::E6006]);
}

fn host(op: &str, a: i64, b: i64) -> Option<i64> {
    match op {
        "+" => a.checked_add(b),
        "-" => a.checked_sub(b),
        "*" => a.checked_mul(b),
        "/" => a.checked_div(b),
        "%" => a.checked_rem(b),
        "<" => Some(i64::from(a < b)),
        _ => unreachable!(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn intrinsics_match_host_arithmetic(
        op in prop::sample::select(vec!["+", "-", "*", "/", "%", "<"]),
        a in any::<i64>(),
        b in any::<i64>().prop_filter("nonzero divisor", |b| *b != 0),
    ) {
        let outcome = run(&format!("({op} {a} {b})"));
        match host(op, a, b) {
            Some(n) => prop_assert_eq!(outcome.value(), &Value::Int(n)),
            None => prop_assert_eq!(outcome.codes(), vec![ErrorCode::E6008]),
        }
    }

    #[test]
    fn put_echoes_any_integer(n in any::<i64>()) {
        let outcome = run(&format!("(put {n})"));
        prop_assert_eq!(outcome.output, format!("{n}\n"));
    }
}
