//! InMemoryStore - HashMap-backed store for testing and development.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{HashStore, StoreError};

/// In-memory store keeping hashes and sets behind `RwLock`s.
///
/// Clone-friendly via `Arc`; all clones share the same data. Lock
/// poisoning surfaces as [`StoreError::LockPoisoned`].
#[derive(Clone, Default)]
pub struct InMemoryStore {
    hashes: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
    sets: Arc<RwLock<HashMap<String, BTreeSet<String>>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HashStore for InMemoryStore {
    async fn hash_write(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError> {
        let mut hashes = self
            .hashes
            .write()
            .map_err(|_| StoreError::LockPoisoned("hash write"))?;
        let hash = hashes.entry(key.to_string()).or_default();
        for (field, value) in fields {
            hash.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn hash_read_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let hashes = self
            .hashes
            .read()
            .map_err(|_| StoreError::LockPoisoned("hash read"))?;
        Ok(hashes.get(key).cloned().unwrap_or_default())
    }

    async fn key_delete(&self, key: &str) -> Result<(), StoreError> {
        let mut hashes = self
            .hashes
            .write()
            .map_err(|_| StoreError::LockPoisoned("key delete"))?;
        hashes.remove(key);
        Ok(())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<(), StoreError> {
        let mut sets = self
            .sets
            .write()
            .map_err(|_| StoreError::LockPoisoned("set add"))?;
        sets.entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<(), StoreError> {
        let mut sets = self
            .sets
            .write()
            .map_err(|_| StoreError::LockPoisoned("set remove"))?;
        if let Some(set) = sets.get_mut(key) {
            set.remove(member);
        }
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let sets = self
            .sets
            .read()
            .map_err(|_| StoreError::LockPoisoned("set members"))?;
        Ok(sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }
}
