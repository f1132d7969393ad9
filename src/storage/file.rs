//! File-backed store keeping one file per key.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::KeyValueStore;

/// Directory name under the platform cache directory for the default store
const APP_DIR: &str = "walkdown";

/// Store rooted at a directory, one file per key holding the value verbatim.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default store location under the platform cache directory
    /// (e.g. `~/.cache/walkdown` on Linux).
    pub fn default_dir() -> Result<PathBuf> {
        let cache_dir =
            dirs::cache_dir().ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_DIR))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stored value for '{}'", key))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory for '{}'", key))?;
        }

        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write stored value for '{}'", key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to delete stored value for '{}'", key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store.set("authToken", "abc123").expect("set");
        assert_eq!(
            store.get("authToken").expect("get"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        assert_eq!(store.get("authToken").expect("get"), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store.set("user", "{}").expect("set");
        store.remove("user").expect("first remove");
        assert_eq!(store.get("user").expect("get"), None);
        store.remove("user").expect("second remove");
    }

    #[test]
    fn test_set_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("nested").join("store"));

        store.set("authToken", "tok").expect("set");
        assert_eq!(
            store.get("authToken").expect("get"),
            Some("tok".to_string())
        );
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store.set("authToken", "old").expect("set old");
        store.set("authToken", "new").expect("set new");
        assert_eq!(
            store.get("authToken").expect("get"),
            Some("new".to_string())
        );
    }
}
