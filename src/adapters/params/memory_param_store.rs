use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::errors::{KeylinkError, Result};
use crate::core::traits::param_store::ParamStore;

/// In-memory store for tests. Writes can be made to fail.
#[derive(Default)]
pub struct MemoryParamStore {
    values: RefCell<HashMap<String, String>>,
    pub fail_writes: bool,
    /// Fail writes to this key only.
    pub fail_key: Option<&'static str>,
}

impl MemoryParamStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (k, v) in pairs {
            store
                .values
                .borrow_mut()
                .insert(k.to_string(), v.to_string());
        }
        store
    }

    /// Raw value, `None` when never written or removed.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl ParamStore for MemoryParamStore {
    fn get(&self, key: &str) -> Result<String> {
        Ok(self.value(key).unwrap_or_default())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes || self.fail_key == Some(key) {
            return Err(KeylinkError::ParamWrite {
                key: key.to_string(),
                path: "memory".into(),
                reason: "read-only".into(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
