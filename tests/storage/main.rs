//! Integration tests for Layer 1: Storage
//!
//! Tests for the kind registry, the object store, and the JSON backing file.

mod store;

use hbnb_storage::{ObjectStore, StoreConfig};
use tempfile::TempDir;

/// Creates a store backed by `file.json` in a fresh temporary directory.
pub fn temp_store() -> (TempDir, ObjectStore) {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::default().with_file_path(dir.path().join("file.json"));
    (dir, ObjectStore::new(config))
}
