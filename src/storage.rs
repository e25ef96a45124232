// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use std::collections::HashMap;

/// A named key-value slot capability. The ledger writes its whole state
/// into a single key.
pub trait SlotStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> LedgerResult<()>;
    fn delete(&mut self, key: &str) -> LedgerResult<()>;
}

/// In-process store, used by tests and as a scratch backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut s = Self::default();
        s.slots.insert(key.to_string(), value.to_string());
        s
    }

    /// Make every subsequent `load` fail.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl SlotStore for MemoryStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>> {
        if self.fail_reads {
            return Err(LedgerError::Persistence(format!("read of '{}' refused", key)));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        if self.fail_writes {
            return Err(LedgerError::Persistence(format!("write of '{}' refused", key)));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> LedgerResult<()> {
        if self.fail_writes {
            return Err(LedgerError::Persistence(format!("delete of '{}' refused", key)));
        }
        self.slots.remove(key);
        Ok(())
    }
}
