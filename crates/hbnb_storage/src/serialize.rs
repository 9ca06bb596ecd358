//! Object table serialization to and from the JSON backing file.
//!
//! The file holds one JSON object mapping each composite key to that
//! entity's flat record. Writes go to a sibling `.tmp` file first and are
//! then renamed over the target, so a failed save never truncates the
//! previous contents.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hbnb_foundation::{Error, Result};

use crate::registry::Registry;
use crate::table::ObjectTable;

/// A flat serialized entity: `id`, timestamps, fields, and `__class__`.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Serializes a table to JSON text.
///
/// # Errors
///
/// Returns an error if any entity cannot be encoded.
pub fn to_string(table: &ObjectTable, pretty: bool) -> Result<String> {
    let mut document = Record::new();
    for entity in table.iter() {
        document.insert(
            entity.key(),
            serde_json::Value::Object(Registry::serialize(entity)?),
        );
    }
    let document = serde_json::Value::Object(document);
    let text = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    text.map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a table from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a JSON object of records, if any
/// record names an unknown kind or lacks its identity fields, or if a
/// record is filed under a key other than its own `"<Kind>.<id>"`.
pub fn from_str(text: &str) -> Result<ObjectTable> {
    let document: Record =
        serde_json::from_str(text).map_err(|e| Error::serialization(e.to_string()))?;

    let mut table = ObjectTable::new();
    for (key, raw) in &document {
        let serde_json::Value::Object(record) = raw else {
            return Err(Error::serialization(format!("entry '{key}' is not an object")));
        };
        let entity = Registry::deserialize(record).map_err(|e| e.with_context(key.clone()))?;
        if entity.key() != *key {
            return Err(Error::serialization(format!(
                "entry '{key}' holds {}",
                entity.key()
            )));
        }
        table.insert(entity);
    }
    Ok(table)
}

/// Saves a table to `path`, replacing its previous contents atomically.
///
/// # Errors
///
/// Returns a persistence error if the temporary file cannot be written or
/// renamed, or a serialization error if encoding fails.
pub fn save_to_file<P: AsRef<Path>>(table: &ObjectTable, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let text = to_string(table, pretty)?;
    let temp_path = temp_path_for(path);

    fs::write(&temp_path, text).map_err(|e| {
        Error::persistence(format!(
            "failed to write file '{}': {e}",
            temp_path.display()
        ))
    })?;
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::persistence(format!(
            "failed to replace file '{}': {e}",
            path.display()
        ))
    })
}

/// Loads a table from `path`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns a persistence error if the file exists but cannot be read, or a
/// serialization error if its contents cannot be decoded.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Option<ObjectTable>> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::persistence(format!(
                "failed to read file '{}': {e}",
                path.display()
            )));
        }
    };
    from_str(&text).map(Some)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
