use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn allocate_hands_out_fresh_locations() {
    let mut store = Store::new();
    let a = store.allocate(Value::Int(1)).unwrap();
    let b = store.allocate(Value::Int(2)).unwrap();
    assert_ne!(a, b);
    assert_eq!(store.read(a), Ok(Value::Int(1)));
    assert_eq!(store.read(b), Ok(Value::Int(2)));
    assert_eq!(store.len(), 2);
}

#[test]
fn locations_are_never_reused() {
    let mut store = Store::new();
    let a = store.allocate(Value::Void).unwrap();
    store.remove(a);
    let b = store.allocate(Value::Void).unwrap();
    assert_ne!(a, b);
    assert!(b > a);
    assert!(!store.contains(a));
}

#[test]
fn write_backpatches() {
    let mut store = Store::new();
    let loc = store.allocate(Value::Void).unwrap();
    store.write(loc, Value::Int(9)).unwrap();
    assert_eq!(store.read(loc), Ok(Value::Int(9)));
    assert_eq!(store.len(), 1);
}

#[test]
fn read_of_missing_location_is_internal_fault() {
    let store = Store::new();
    let err = store.read(Location::from_raw(42)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InternalFault { .. }));
    assert!(err.to_string().contains("loc#42"));
}

#[test]
fn write_to_missing_location_is_internal_fault() {
    let mut store = Store::new();
    let err = store
        .write(Location::from_raw(0), Value::Int(1))
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InternalFault { .. }));
    assert!(store.is_empty());
}

#[test]
fn remove_returns_old_value() {
    let mut store = Store::new();
    let loc = store.allocate(Value::Int(5)).unwrap();
    assert_eq!(store.remove(loc), Some(Value::Int(5)));
    assert_eq!(store.remove(loc), None);
    assert!(store.is_empty());
}

#[test]
fn debug_lists_cells_in_order() {
    let mut store = Store::new();
    store.allocate(Value::Int(1)).unwrap();
    store.allocate(Value::Void).unwrap();
    assert_eq!(format!("{store:?}"), "{loc#0: Int(1), loc#1: Void}");
}

#[test]
fn allocate_fails_when_locations_run_out() {
    let mut store = Store::starting_at(u64::MAX);
    let err = store.allocate(Value::Int(1)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InternalFault { .. }));
    assert!(store.is_empty());
}
