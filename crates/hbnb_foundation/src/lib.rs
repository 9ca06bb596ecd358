//! Core values, identifiers, timestamps, and errors for hbnb.
//!
//! This crate provides:
//! - [`Value`] - The scalar-or-list value carried by entity fields
//! - [`Type`] - Field type descriptors used by kind schemas
//! - [`EntityId`] - Opaque entity identifiers
//! - [`Timestamp`] - Microsecond-precision UTC timestamps with a fixed text format
//! - [`Error`] - Typed errors shared by the store and the console
//! - Persistent collections ([`PersistentVec`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod entity;
pub mod error;
pub mod timestamp;
pub mod types;
pub mod value;

pub use collections::PersistentVec;
pub use entity::EntityId;
pub use error::{Error, ErrorKind, Malformed};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};
pub use types::Type;
pub use value::Value;

/// Result type alias using the hbnb [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
