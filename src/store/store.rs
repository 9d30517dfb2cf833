use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use redis::RedisError;

/// Error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// A failure surfaced by the Redis client, propagated verbatim.
    Redis(RedisError),
    /// A poisoned lock in the in-memory backend.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Redis(err) => write!(f, "{}", err),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Redis(err) => Some(err),
            StoreError::LockPoisoned(_) => None,
        }
    }
}

impl From<RedisError> for StoreError {
    fn from(err: RedisError) -> Self {
        StoreError::Redis(err)
    }
}

/// The key-value surface consumed by models: string hashes for records,
/// sets for the per-model id registry, and key deletion.
///
/// All operations are single round-trips; implementations add no caching,
/// retries, or locking of their own.
#[async_trait]
pub trait HashStore: Send + Sync {
    /// Merge `fields` into the hash at `key`, creating it if absent.
    async fn hash_write(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError>;

    /// Read every field of the hash at `key`. A missing key reads as an
    /// empty map.
    async fn hash_read_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;

    /// Delete `key` outright.
    async fn key_delete(&self, key: &str) -> Result<(), StoreError>;

    /// Add `member` to the set at `key` (idempotent).
    async fn set_add(&self, key: &str, member: &str) -> Result<(), StoreError>;

    /// Remove `member` from the set at `key` (idempotent).
    async fn set_remove(&self, key: &str, member: &str) -> Result<(), StoreError>;

    /// List every member of the set at `key`, in no guaranteed order.
    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError>;
}
