use std::cell::RefCell;
use std::rc::Rc;

use super::{PreferenceStore, StoreError};

#[derive(Debug, Default)]
struct Slot {
    value: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory store whose clones share one slot.
///
/// Keep a clone to inspect what the controller wrote, or flip it into a
/// failing mode to simulate unavailable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Slot>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        let store = Self::new();
        store.slot.borrow_mut().value = Some(value.into());
        store
    }

    /// Returns the raw stored value without going through the trait.
    pub fn value(&self) -> Option<String> {
        self.slot.borrow().value.clone()
    }

    /// Removes the stored value, as if the user cleared site data.
    pub fn clear(&self) {
        self.slot.borrow_mut().value = None;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.slot.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.slot.borrow_mut().fail_writes = fail;
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let slot = self.slot.borrow();
        if slot.fail_reads {
            return Err(StoreError::Unavailable);
        }
        Ok(slot.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        let mut slot = self.slot.borrow_mut();
        if slot.fail_writes {
            return Err(StoreError::Rejected {
                key: "memory".to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        slot.value = Some(value.to_string());
        Ok(())
    }
}
