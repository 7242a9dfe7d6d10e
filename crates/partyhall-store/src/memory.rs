//! In-memory [`KeyValueStore`] implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{KeyValueStore, StoreError};

/// An in-process store of hashes, for tests and development servers.
///
/// Cloning is cheap and every clone shares the same data — the same
/// way a real store client handle behaves. Each trait method takes
/// the internal mutex once, so every operation is atomic with respect
/// to concurrent callers.
///
/// Keys are kept in a `BTreeMap`, so enumeration order is sorted and
/// deterministic. Real stores make no ordering promise and callers
/// must not rely on one; determinism here just keeps tests stable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<BTreeMap<String, HashMap<String, String>>>>,
}

impl MemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn hash_set(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let hash = inner.entry(key.to_owned()).or_default();
        for (field, value) in fields {
            hash.insert((*field).to_owned(), value.clone());
        }
        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.get(key).cloned().unwrap_or_default())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;
        Ok(u64::from(inner.remove(key).is_some()))
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.lock().await;
        let keys = match pattern.strip_suffix('*') {
            Some(prefix) => inner
                .keys()
                .filter(|k| k.starts_with(prefix))
                .cloned()
                .collect(),
            None => inner
                .keys()
                .filter(|k| k.as_str() == pattern)
                .cloned()
                .collect(),
        };
        Ok(keys)
    }
}
