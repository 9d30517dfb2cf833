//! Stores - the key-value surface the mapper runs against.
//!
//! [`HashStore`] is the narrow store contract (string hashes, membership
//! sets, key deletion). [`RedisStore`] is the production backend over the
//! redis client's connection manager; [`InMemoryStore`] backs tests and
//! development. Connection lifecycle belongs to the caller, never to the
//! mapper.

mod in_memory;
mod redis;
mod store;

pub use self::redis::RedisStore;
pub use in_memory::InMemoryStore;
pub use store::{HashStore, StoreError};
