//! The store: every heap cell the program can reach lives here.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::internal_fault;
use crate::{EvalError, Value};

/// Address of one store cell.
///
/// Handed out by a monotonic counter, so a location is never reused even
/// after the collector frees it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Location(u64);

impl Location {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Location(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loc#{}", self.0)
    }
}

/// Mapping from `Location` to `Value`.
///
/// Grows by one cell per `allocate`; shrinks only when the collector calls
/// `remove`.
#[derive(Default)]
pub struct Store {
    cells: FxHashMap<Location, Value>,
    next: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `value` in a fresh cell.
    ///
    /// Fails once the location counter is used up.
    pub fn allocate(&mut self, value: Value) -> Result<Location, EvalError> {
        let loc = Location(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or_else(|| internal_fault("store ran out of locations"))?;
        self.cells.insert(loc, value);
        Ok(loc)
    }

    /// An empty store whose next location is `next`.
    #[cfg(test)]
    pub(crate) fn starting_at(next: u64) -> Self {
        Store {
            cells: FxHashMap::default(),
            next,
        }
    }

    /// Value at `loc`. A missing cell means the collector or an environment
    /// lost track of a live location.
    pub fn read(&self, loc: Location) -> Result<Value, EvalError> {
        self.cells
            .get(&loc)
            .cloned()
            .ok_or_else(|| internal_fault(format!("read of unallocated location {loc:?}")))
    }

    /// Overwrite an existing cell.
    pub fn write(&mut self, loc: Location, value: Value) -> Result<(), EvalError> {
        match self.cells.get_mut(&loc) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(internal_fault(format!(
                "write to unallocated location {loc:?}"
            ))),
        }
    }

    /// Free a cell. Only the collector's sweep calls this.
    pub(crate) fn remove(&mut self, loc: Location) -> Option<Value> {
        self.cells.remove(&loc)
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.cells.contains_key(&loc)
    }

    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells.keys().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells: Vec<_> = self.cells.iter().collect();
        cells.sort_by_key(|(loc, _)| **loc);
        f.debug_map().entries(cells).finish()
    }
}

#[cfg(test)]
mod tests;
