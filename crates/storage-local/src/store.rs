//! JSON-file implementation of the core state store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;

use crate::errors::StorageError;
use fleetquote_core::errors::Result;
use fleetquote_core::store::StateStore;

/// A named-blob store backed by a single JSON object file.
///
/// The whole file is read once at open; `set` updates the in-memory map and
/// rewrites the file through a temp-file-plus-rename, so a crash mid-write
/// never leaves a torn state file behind.
pub struct LocalStateStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl LocalStateStore {
    /// Opens the store at `path`. A missing file reads as an empty store and
    /// is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache: HashMap<String, String> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(StorageError::from)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StorageError::from(e).into()),
        };
        debug!("opened state store at {} ({} keys)", path.display(), cache.len());

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    fn persist(&self, snapshot: &HashMap<String, String>) -> std::result::Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(snapshot)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl StateStore for LocalStateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.read().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let snapshot = {
            let mut cache = self.cache.write().unwrap();
            cache.insert(key.to_string(), value.to_string());
            cache.clone()
        };
        self.persist(&snapshot)?;
        Ok(())
    }
}
