//! Configuration for the object store.

use std::env;
use std::path::{Path, PathBuf};

/// Backing file used when nothing else is configured.
pub const DEFAULT_FILE: &str = "file.json";

/// Environment variable overriding the backing file path.
pub const FILE_ENV_VAR: &str = "HBNB_FILE";

/// Configuration for an [`ObjectStore`](crate::ObjectStore).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON backing file.
    pub file_path: PathBuf,

    /// Write indented JSON instead of a single line.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE),
            pretty: false,
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration, taking the file path from
    /// `HBNB_FILE` when it is set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var_os(FILE_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::default().with_file_path(path),
            _ => Self::default(),
        }
    }

    /// Builder method to set the backing file path.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Builder method to set pretty-printed output.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}
