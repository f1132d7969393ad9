//! Pluggable key/value storage for session state.
//!
//! The auth client persists its session through this abstraction instead of
//! touching the filesystem directly, so embedding shells can supply their
//! own backing store and tests can run against an in-memory fake.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// A string key/value store with the three capabilities the session needs.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, creating the key if needed.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
