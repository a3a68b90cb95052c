//! Shared in-memory test doubles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{Error, Result, StoreError};
use crate::store::StateStore;

/// In-memory state store, with a failure switch for exercising
/// fire-and-forget persistence paths.
#[derive(Default)]
pub(crate) struct MemoryStateStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStateStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut map = store.entries.lock().unwrap();
            for (key, value) in entries {
                map.insert((*key).to_string(), (*value).to_string());
            }
        }
        store
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Store(StoreError::Io(
                "intentional write failure".to_string(),
            )));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
