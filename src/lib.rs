//! hbnb - Command-driven object store
//!
//! This crate re-exports all layers of the hbnb system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: hbnb_console    — Command parsing, dispatcher, REPL, CLI
//! Layer 1: hbnb_storage    — Kinds, schemas, entities, JSON-backed object store
//! Layer 0: hbnb_foundation — Core types (Value, Type, EntityId, Timestamp, Error)
//! ```

pub use hbnb_console as console;
pub use hbnb_foundation as foundation;
pub use hbnb_storage as storage;
