use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{GateError, GateResult};
use crate::navigation::Navigator;
use crate::storage::KeyValueStore;

// =========================================================
// Shared Mock Components
// =========================================================

/// In-memory storage with an operation log and switchable failures.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    log: RefCell<Vec<String>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        self.log.borrow_mut().push(format!("get:{key}"));
        if self.fail_reads.get() {
            return Err(GateError::storage("get", "storage disabled"));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GateResult<()> {
        self.log.borrow_mut().push(format!("set:{key}"));
        if self.fail_writes.get() {
            return Err(GateError::storage("set", "quota exceeded"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> GateResult<()> {
        self.log.borrow_mut().push(format!("remove:{key}"));
        if self.fail_writes.get() {
            return Err(GateError::storage("remove", "storage disabled"));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Records every hard navigation instead of reloading anything.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}
