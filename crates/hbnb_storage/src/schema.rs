//! Schema definitions for entity kinds.
//!
//! A schema lists the fields an entity of a kind carries, their types, and
//! the value each field starts with when it was not supplied.

use hbnb_foundation::{Type, Value};

/// Discriminator key naming the kind in a serialized record.
pub const CLASS_KEY: &str = "__class__";

/// Field names that no update path may set.
pub const PROTECTED_FIELDS: [&str; 5] = ["id", "kind", "created_at", "updated_at", CLASS_KEY];

/// Returns true if `name` is an identity or timestamp field.
#[must_use]
pub fn is_protected(name: &str) -> bool {
    PROTECTED_FIELDS.contains(&name)
}

/// Schema definition for an entity kind.
#[derive(Clone, Debug, PartialEq)]
pub struct KindSchema {
    /// Kind name (e.g., `Place`).
    pub name: &'static str,
    /// Field definitions, in display and serialization order.
    pub fields: Vec<FieldSchema>,
}

impl KindSchema {
    /// Creates a schema with no fields.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the schema.
    #[must_use]
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field schema by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns every field paired with its starting value.
    #[must_use]
    pub fn defaults(&self) -> Vec<(String, Value)> {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.default_value()))
            .collect()
    }
}

/// Schema definition for a single field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSchema {
    /// Field name.
    pub name: &'static str,
    /// Field type.
    pub ty: Type,
    /// Explicit default, overriding the type's zero value.
    pub default: Option<Value>,
}

impl FieldSchema {
    /// Creates a field whose default is its type's zero value.
    #[must_use]
    pub fn new(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            ty,
            default: None,
        }
    }

    /// Sets an explicit default value.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Returns the value this field holds when nothing was supplied.
    #[must_use]
    pub fn default_value(&self) -> Value {
        self.default
            .clone()
            .unwrap_or_else(|| self.ty.default_value())
    }
}
