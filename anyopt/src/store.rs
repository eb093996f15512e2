//! Resolved-value slots.
//!
//! One slot per declared option, shared between a name entry and its
//! character alias. Slots hold owned text; writes are last-wins. A flag
//! that is "on" holds a fixed sentinel, so "not present" and "off" are the
//! same observable state.

use crate::error::Result;
use crate::registry::{Registry, DEFAULT_CAPACITY};

/// Sentinel stored in a slot whose flag has been switched on.
pub(crate) const TRUE_FLAG: &str = "true";

#[derive(Debug)]
pub(crate) struct ValueStore {
    slots: Registry<Option<String>>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ValueStore {
            slots: Registry::with_capacity(capacity),
        }
    }

    /// Add one empty slot and return its index. Called once per
    /// declaration, so the store length doubles as the shared slot counter.
    pub fn reserve_slot(&mut self) -> Result<usize> {
        Ok(self.slots.append(None)?)
    }

    /// Copy `text` into the slot, replacing any prior content.
    pub fn write(&mut self, slot: usize, text: &str) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = Some(text.to_string());
        }
    }

    pub fn write_flag(&mut self, slot: usize) {
        self.write(slot, TRUE_FLAG);
    }

    pub fn read(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    /// True iff the slot holds exactly the flag sentinel.
    pub fn read_flag(&self, slot: usize) -> bool {
        self.read(slot) == Some(TRUE_FLAG)
    }
}
