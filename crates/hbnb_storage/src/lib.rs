//! Entity schemas, the kind registry, and the JSON-backed object store.
//!
//! This crate provides:
//! - [`Kind`] and [`Registry`] - The fixed set of entity kinds and their construction
//! - [`Entity`] - A typed record with identity, timestamps, and ordered fields
//! - [`ObjectTable`] - The in-memory table keyed by `"<Kind>.<id>"`
//! - [`ObjectStore`] - Lookup, mutation, and whole-table persistence
//! - [`StoreConfig`] - Backing file configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod entity;
pub mod registry;
pub mod schema;
pub mod serialize;
pub mod store;
pub mod table;

pub use config::{DEFAULT_FILE, FILE_ENV_VAR, StoreConfig};
pub use entity::{Entity, composite_key};
pub use registry::{Kind, Registry};
pub use schema::{CLASS_KEY, FieldSchema, KindSchema};
pub use serialize::{Record, load_from_file, save_to_file};
pub use store::{ObjectStore, ReloadOutcome};
pub use table::ObjectTable;
