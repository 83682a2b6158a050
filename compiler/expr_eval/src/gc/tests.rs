use super::*;
use crate::{CallFrame, Environment, EvalErrorKind};
use expr_ir::{ExprId, NameRange, StringInterner};
use pretty_assertions::assert_eq;

fn closure_over(env: Environment) -> Value {
    Value::closure(env, NameRange::EMPTY, ExprId::new(0))
}

#[test]
fn empty_store_collects_nothing() {
    let mut store = Store::new();
    let stack = CallStack::default();
    assert_eq!(collect(&mut store, &stack), Ok(GcStats::default()));
}

#[test]
fn unrooted_cells_are_reclaimed() {
    let mut store = Store::new();
    store.allocate(Value::Int(1)).unwrap();
    store.allocate(Value::Int(2)).unwrap();
    let stack = CallStack::default();

    let stats = collect(&mut store, &stack).unwrap();
    assert_eq!(
        stats,
        GcStats {
            marked: 0,
            reclaimed: 2,
            live: 0
        }
    );
    assert!(store.is_empty());
}

#[test]
fn frame_bindings_are_kept() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut store = Store::new();
    let kept = store.allocate(Value::Int(1)).unwrap();
    let dropped = store.allocate(Value::Int(2)).unwrap();

    let mut stack = CallStack::default();
    stack.replace_current_env(Environment::new().extend(x, kept));

    let stats = collect(&mut store, &stack).unwrap();
    assert_eq!(stats.reclaimed, 1);
    assert!(store.contains(kept));
    assert!(!store.contains(dropped));
}

#[test]
fn closures_keep_their_captured_cells() {
    let interner = StringInterner::new();
    let (f, y) = (interner.intern("f"), interner.intern("y"));
    let mut store = Store::new();

    // y is only reachable through the closure stored at f.
    let y_loc = store.allocate(Value::Int(7)).unwrap();
    let captured = Environment::new().extend(y, y_loc);
    let f_loc = store.allocate(closure_over(captured)).unwrap();
    let garbage = store.allocate(Value::Void).unwrap();

    let mut stack = CallStack::default();
    stack
        .push(CallFrame {
            env: Environment::new().extend(f, f_loc),
            callee: None,
            call_span: None,
        })
        .unwrap();

    let stats = collect(&mut store, &stack).unwrap();
    assert_eq!(stats.marked, 2);
    assert_eq!(stats.reclaimed, 1);
    assert!(store.contains(y_loc));
    assert!(!store.contains(garbage));
}

#[test]
fn self_referential_closure_terminates() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut store = Store::new();

    let f_loc = store.allocate(Value::Void).unwrap();
    let env = Environment::new().extend(f, f_loc);
    store.write(f_loc, closure_over(env.clone())).unwrap();

    let mut stack = CallStack::default();
    stack.replace_current_env(env);
    let stats = collect(&mut store, &stack).unwrap();
    assert_eq!(stats.marked, 1);
    assert_eq!(stats.live, 1);
}

#[test]
fn temporaries_are_roots() {
    let interner = StringInterner::new();
    let z = interner.intern("z");
    let mut store = Store::new();
    let z_loc = store.allocate(Value::Int(3)).unwrap();

    let mut stack = CallStack::default();
    stack.push_temporary(closure_over(Environment::new().extend(z, z_loc)));
    collect(&mut store, &stack).unwrap();
    assert!(store.contains(z_loc));

    stack.truncate_temporaries(0);
    collect(&mut store, &stack).unwrap();
    assert!(!store.contains(z_loc));
}

#[test]
fn popped_frame_cells_become_garbage() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut store = Store::new();
    let arg = store.allocate(Value::Int(5)).unwrap();

    let mut stack = CallStack::default();
    stack
        .push(CallFrame {
            env: Environment::new().extend(x, arg),
            callee: None,
            call_span: None,
        })
        .unwrap();
    assert_eq!(collect(&mut store, &stack).unwrap().reclaimed, 0);

    stack.pop();
    assert_eq!(collect(&mut store, &stack).unwrap().reclaimed, 1);
}

#[test]
fn dangling_root_is_internal_fault() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut store = Store::new();
    let mut stack = CallStack::default();
    stack.replace_current_env(Environment::new().extend(x, Location::from_raw(99)));

    let err = collect(&mut store, &stack).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InternalFault { .. }));
}
