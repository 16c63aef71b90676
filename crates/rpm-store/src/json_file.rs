//! # JSON File Store
//!
//! The production [`KvStore`]: one `<key>.json` file per collection under a
//! data directory.
//!
//! ## Layout
//! ```text
//! <data_dir>/
//! ├── rpm_menu.json
//! ├── rpm_orders.json
//! └── rpm_expenses.json
//! ```
//!
//! ## Crash Safety
//! Saves write to a `<key>.json.tmp` sibling first and then rename over the
//! target, so a crash mid-write leaves the previous value intact. Rename is
//! atomic on the same filesystem, which a sibling path guarantees.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;
use crate::kv::KvStore;

/// A file-backed key-value store rooted at a data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened JSON file store");
        Ok(JsonFileStore { dir })
    }

    /// The directory this store persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, json: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn clear_all(&self) -> StoreResult<()> {
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)?;
            }
        }
        debug!(dir = %self.dir.display(), "cleared all stored collections");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{load_collection, save_collection};

    #[test]
    fn test_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.load("rpm_menu").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save("rpm_menu", "[1,2,3]").unwrap();
        assert_eq!(store.load("rpm_menu").unwrap().as_deref(), Some("[1,2,3]"));

        // Value lands in <key>.json with no leftover temp file
        assert!(dir.path().join("rpm_menu.json").exists());
        assert!(!dir.path().join("rpm_menu.json.tmp").exists());
    }

    #[test]
    fn test_reopen_sees_saved_data() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).unwrap();
            save_collection(&store, "rpm_menu", &[10i64, 20]).unwrap();
        }
        let store = JsonFileStore::open(dir.path()).unwrap();
        let values: Vec<i64> = load_collection(&store, "rpm_menu");
        assert_eq!(values, vec![10, 20]);
    }

    #[test]
    fn test_clear_all_removes_every_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.save("rpm_menu", "[]").unwrap();
        store.save("rpm_orders", "[]").unwrap();

        store.clear_all().unwrap();
        assert!(store.load("rpm_menu").unwrap().is_none());
        assert!(store.load("rpm_orders").unwrap().is_none());

        // Idempotent on an already-empty directory
        store.clear_all().unwrap();
    }

    #[test]
    fn test_corrupt_file_fails_open_via_helper() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.save("rpm_orders", "{truncated").unwrap();

        let values: Vec<i64> = load_collection(&store, "rpm_orders");
        assert!(values.is_empty());
    }
}
