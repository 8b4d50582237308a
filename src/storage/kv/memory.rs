//! In-memory key-value store.
//!
//! Stand-in for the browser's `localStorage` surface: used as the default
//! backing store in tests and as the degraded mode when no durable surface
//! is available.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::traits::KvStore;

/// `HashMap` behind a mutex; contents live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store mutex poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = MemoryKvStore::new();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }
}
