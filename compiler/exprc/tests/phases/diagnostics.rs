//! Rendered runtime diagnostics.

use pretty_assertions::assert_eq;

use expr_eval::RuntimeConfig;

use crate::common::{render, run, run_configured};

#[test]
fn division_by_zero_inside_a_call() {
    let source = "letrec (f = lambda (x) { (/ x 0) }) { (f 1) }";
    let outcome = run(source);
    let diags = outcome.result.unwrap_err();
    let expected = "\
error[E6006]: division by zero
  --> div.expr:1:26: division by zero here
      div.expr:1:39: frame 0: call to `f`
  = help: check the divisor with `(== d 0)` before dividing
";
    assert_eq!(render(&diags, "div.expr", source), expected);
}

#[test]
fn unbound_variable_on_second_line() {
    let source = "[ (put 1)\n  (put y) ]";
    let outcome = run(source);
    let diags = outcome.result.unwrap_err();
    let expected = "\
error[E6001]: unbound variable `y`
  --> prog.expr:2:8: not found in this scope
  = help: bind `y` with `letrec (y = ...) { ... }`
";
    assert_eq!(render(&diags, "prog.expr", source), expected);
}

#[test]
fn anonymous_frames_in_backtrace() {
    let source = "(lambda () { (error) })";
    let diags = run(source).result.unwrap_err();
    let rendered = render(&diags, "anon.expr", source);
    assert!(rendered.starts_with("error[E6009]: program called `error`\n"));
    assert!(
        rendered.contains("      anon.expr:1:1: frame 0: call to <anonymous>\n"),
        "{rendered}"
    );
}

#[test]
fn parse_errors_render_with_positions() {
    let source = "(+ 1\n";
    let diags = run(source).result.unwrap_err();
    let rendered = render(&diags, "open.expr", source);
    assert!(rendered.starts_with("error[E1003]"), "{rendered}");
    assert!(rendered.contains("open.expr:1:1"), "{rendered}");
}

#[test]
fn deep_backtraces_show_innermost_calls() {
    let source = "letrec (loop = lambda (n) { (loop (+ n 1)) }) { (loop 0) }";
    let config = RuntimeConfig {
        max_call_depth: Some(20),
        ..RuntimeConfig::default()
    };
    let diags = run_configured(source, "", config).result.unwrap_err();
    let rendered = render(&diags, "deep.expr", source);
    assert!(rendered.starts_with("error[E6010]"), "{rendered}");
    assert_eq!(rendered.matches("call to `loop`").count(), 16);
    assert!(rendered.contains("      deep.expr:1:29: frame 0: call to `loop`\n"), "{rendered}");
    assert!(rendered.contains("      deep.expr:1:29: frame 15: call to `loop`\n"), "{rendered}");
    assert!(rendered.contains("  = note: 4 older calls not shown\n"), "{rendered}");
}
