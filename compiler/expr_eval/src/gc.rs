//! On-demand mark-and-sweep collection over the store.
//!
//! Roots are every environment on the call stack plus the temporaries
//! stack. Marking follows closures' captured environments transitively;
//! integers and void have no outgoing references. Sweeping removes every
//! store cell that was not marked.

use rustc_hash::FxHashSet;

use crate::errors::internal_fault;
use crate::{CallStack, EvalError, Location, Store, Value};

/// Outcome of one collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GcStats {
    /// Locations found reachable.
    pub marked: usize,
    /// Locations removed.
    pub reclaimed: usize,
    /// Store size after the sweep.
    pub live: usize,
}

/// Run one full collection.
///
/// Fails with an internal fault if a reachable location has no store cell.
pub fn collect(store: &mut Store, stack: &CallStack) -> Result<GcStats, EvalError> {
    let marked = mark(store, stack)?;

    let dead: Vec<Location> = store
        .locations()
        .filter(|loc| !marked.contains(loc))
        .collect();
    for &loc in &dead {
        store.remove(loc);
    }

    let stats = GcStats {
        marked: marked.len(),
        reclaimed: dead.len(),
        live: store.len(),
    };
    tracing::debug!(
        marked = stats.marked,
        reclaimed = stats.reclaimed,
        live = stats.live,
        "garbage collection finished"
    );
    Ok(stats)
}

/// Every location reachable from the stack.
fn mark(store: &Store, stack: &CallStack) -> Result<FxHashSet<Location>, EvalError> {
    let mut marked = FxHashSet::default();
    let mut seen_nodes = FxHashSet::default();
    let mut worklist: Vec<Location> = Vec::new();

    for frame in stack.frames() {
        worklist.extend(frame.env.unseen_locations(&mut seen_nodes));
    }
    for value in stack.temporaries() {
        if let Value::Closure(closure) = value {
            worklist.extend(closure.env.unseen_locations(&mut seen_nodes));
        }
    }

    while let Some(loc) = worklist.pop() {
        if !marked.insert(loc) {
            continue;
        }
        let value = store
            .read(loc)
            .map_err(|_| internal_fault(format!("reachable location {loc:?} is not in the store")))?;
        if let Value::Closure(closure) = value {
            worklist.extend(closure.env.unseen_locations(&mut seen_nodes));
        }
    }

    Ok(marked)
}

#[cfg(test)]
mod tests;
