//! Environments: immutable name-to-location binding lists.
//!
//! An environment is a persistent singly linked list, newest binding first.
//! Extending produces a new head that shares the old list as its tail, so
//! capturing an environment in a closure is an `Rc` clone, and later
//! extensions by the defining scope can never be seen by the closure.
//!
//! Environments never own values. They name `Location`s; the `Store` owns
//! the cells.

use std::fmt;
use std::rc::Rc;

use expr_ir::Name;
use rustc_hash::FxHashSet;

use crate::Location;

struct Binding {
    name: Name,
    location: Location,
    next: Option<Rc<Binding>>,
}

/// An ordered sequence of `(Name, Location)` pairs.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Rc<Binding>>,
    len: usize,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new environment with `name` bound to `location` in front of `self`.
    #[must_use]
    pub fn extend(&self, name: Name, location: Location) -> Environment {
        Environment {
            head: Some(Rc::new(Binding {
                name,
                location,
                next: self.head.clone(),
            })),
            len: self.len.saturating_add(1),
        }
    }

    /// Extend with several bindings; later pairs shadow earlier ones.
    #[must_use]
    pub fn extend_many(&self, bindings: impl IntoIterator<Item = (Name, Location)>) -> Environment {
        bindings
            .into_iter()
            .fold(self.clone(), |env, (name, loc)| env.extend(name, loc))
    }

    /// Location of the most recently introduced binding of `name`.
    pub fn lookup(&self, name: Name) -> Option<Location> {
        self.iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, loc)| loc)
    }

    /// Bindings, newest first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    /// Every location this environment names.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter().map(|(_, loc)| loc)
    }

    /// Like `locations`, but stops at the first list node already in `seen`.
    ///
    /// Environments share tails, so a collector tracing many closures would
    /// otherwise walk the same suffix once per closure. Node identity is the
    /// node's address, which is stable while any environment holds it.
    pub(crate) fn unseen_locations<'e>(
        &'e self,
        seen: &'e mut FxHashSet<usize>,
    ) -> impl Iterator<Item = Location> + 'e {
        let mut node = self.head.as_deref();
        std::iter::from_fn(move || {
            let binding = node?;
            if !seen.insert(std::ptr::from_ref(binding) as usize) {
                node = None;
                return None;
            }
            node = binding.next.as_deref();
            Some(binding.location)
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether both environments are the same list.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Unlink iteratively so dropping a long list cannot overflow the stack.
impl Drop for Environment {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut binding) => next = binding.next.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a> {
    node: Option<&'a Binding>,
}

impl Iterator for Iter<'_> {
    type Item = (Name, Location);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.node?;
        self.node = binding.next.as_deref();
        Some((binding.name, binding.location))
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
