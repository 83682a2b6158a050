use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(unbound_variable("x").to_string(), "unbound variable `x`");
    assert_eq!(
        type_mismatch("`+`", "integer", "closure").to_string(),
        "`+` expects integer, found closure"
    );
    assert_eq!(
        not_callable("integer").to_string(),
        "cannot call a value of kind integer"
    );
    assert_eq!(
        arity_mismatch("`f`", 1, 2).to_string(),
        "`f` takes 1 argument but got 2"
    );
    assert_eq!(
        intrinsic_arity(Intrinsic::Add, 3).to_string(),
        "intrinsic `+` takes 2 arguments but got 3"
    );
    assert_eq!(
        integer_overflow(Intrinsic::Mul).to_string(),
        "integer overflow in `*`"
    );
    assert_eq!(user_error().to_string(), "program called `error`");
    assert_eq!(
        stack_overflow(100).to_string(),
        "call depth limit of 100 exceeded"
    );
}

#[test]
fn factories_leave_location_empty() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.span, None);
    assert_eq!(err.backtrace, None);
}

#[test]
fn span_and_backtrace_attach() {
    let backtrace = EvalBacktrace::new(vec![BacktraceFrame {
        name: "fact".to_string(),
        span: Some(Span::new(4, 12)),
    }]);
    let err = modulo_by_zero()
        .with_span(Span::new(1, 2))
        .with_backtrace(backtrace.clone());
    assert_eq!(err.span, Some(Span::new(1, 2)));
    assert_eq!(err.backtrace, Some(backtrace));
}

#[test]
fn backtrace_display_numbers_frames() {
    let backtrace = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "inner".to_string(),
            span: Some(Span::new(10, 15)),
        },
        BacktraceFrame {
            name: "<anonymous>".to_string(),
            span: None,
        },
    ]);
    assert_eq!(backtrace.depth(), 2);
    assert_eq!(
        backtrace.to_string(),
        "  0: inner at 10..15\n  1: <anonymous>\n"
    );
}

#[test]
fn truncated_backtrace_counts_dropped_calls() {
    let frames = vec![BacktraceFrame {
        name: "go".to_string(),
        span: None,
    }];
    let backtrace = EvalBacktrace::truncated(frames, 40);
    assert_eq!(backtrace.frames().len(), 1);
    assert_eq!(backtrace.depth(), 40);
    assert_eq!(backtrace.hidden(), 39);
    assert_eq!(backtrace.to_string(), "  0: go\n  ... 39 more\n");
}

#[test]
fn io_error_keeps_message() {
    let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad digits");
    assert_eq!(
        io_error(&io).kind,
        EvalErrorKind::Io {
            message: "bad digits".to_string()
        }
    );
}
