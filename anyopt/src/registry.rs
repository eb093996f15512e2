//! Append-only growable tables.
//!
//! The engine keeps four parallel tables: long-option names, short-option
//! characters, usage lines, and value slots. All of them sit on this one
//! abstraction, which doubles its capacity when full and reports growth
//! failure to the caller instead of aborting the process.

use std::collections::TryReserveError;
use std::slice;

/// Default capacity for the option catalogs and value slots.
pub(crate) const DEFAULT_CAPACITY: usize = 10;

/// Default capacity for usage-line storage.
pub(crate) const DEFAULT_USAGE_LINES: usize = 3;

#[derive(Debug)]
pub(crate) struct Registry<T> {
    items: Vec<T>,
}

impl<T> Registry<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Registry {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append an item, doubling capacity first when full, and return the
    /// index assigned to it. Indices are stable across growth: every
    /// existing entry is preserved in place.
    pub fn append(&mut self, item: T) -> Result<usize, TryReserveError> {
        if self.len() == self.capacity() {
            let grow = self.capacity().max(1);
            self.items.try_reserve_exact(grow)?;
        }
        let index = self.len();
        self.items.push(item);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}
