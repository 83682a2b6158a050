use super::*;
use expr_ir::StringInterner;
use pretty_assertions::assert_eq;

fn loc(raw: u64) -> Location {
    Location::from_raw(raw)
}

#[test]
fn lookup_finds_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let env = Environment::new().extend(x, loc(0));
    assert_eq!(env.lookup(x), Some(loc(0)));
    assert_eq!(env.len(), 1);
}

#[test]
fn lookup_of_unbound_name_is_none() {
    let interner = StringInterner::new();
    let env = Environment::new().extend(interner.intern("x"), loc(0));
    assert_eq!(env.lookup(interner.intern("y")), None);
    assert_eq!(Environment::new().lookup(interner.intern("x")), None);
}

#[test]
fn newest_binding_wins() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let outer = Environment::new().extend(x, loc(0));
    let inner = outer.extend(x, loc(1));

    assert_eq!(inner.lookup(x), Some(loc(1)));
    // The outer environment is untouched by the extension.
    assert_eq!(outer.lookup(x), Some(loc(0)));
}

#[test]
fn snapshot_is_immune_to_later_extension() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let defining = Environment::new().extend(x, loc(0));
    let captured = defining.clone();
    let later = defining.extend(y, loc(1));

    assert_eq!(later.lookup(y), Some(loc(1)));
    assert_eq!(captured.lookup(y), None);
    assert!(captured.ptr_eq(&defining));
    assert!(!later.ptr_eq(&defining));
}

#[test]
fn extend_many_keeps_order() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");

    let env = Environment::new().extend_many([(a, loc(0)), (b, loc(1)), (a, loc(2))]);
    assert_eq!(env.lookup(a), Some(loc(2)));
    assert_eq!(env.lookup(b), Some(loc(1)));
    assert_eq!(
        env.iter().collect::<Vec<_>>(),
        vec![(a, loc(2)), (b, loc(1)), (a, loc(0))]
    );
    assert_eq!(env.locations().count(), 3);
}

#[test]
fn unseen_locations_stops_at_shared_tail() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let base = Environment::new().extend(x, loc(0)).extend(x, loc(1));
    let left = base.extend(x, loc(2));
    let right = base.extend(x, loc(3));

    let mut seen = FxHashSet::default();
    let first: Vec<_> = left.unseen_locations(&mut seen).collect();
    let second: Vec<_> = right.unseen_locations(&mut seen).collect();

    assert_eq!(first, vec![loc(2), loc(1), loc(0)]);
    assert_eq!(second, vec![loc(3)]);
}

#[test]
fn dropping_a_long_list_does_not_overflow() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut env = Environment::new();
    for i in 0..500_000 {
        env = env.extend(x, loc(i));
    }
    assert_eq!(env.len(), 500_000);
    drop(env);
}

#[test]
fn dropping_one_branch_keeps_shared_tail() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let base = Environment::new().extend(x, loc(0));
    let branch = base.extend(x, loc(1));
    drop(branch);
    assert_eq!(base.lookup(x), Some(loc(0)));
}
