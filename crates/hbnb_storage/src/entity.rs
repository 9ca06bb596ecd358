//! Entities: a kind tag, an identity, two timestamps, and an ordered field map.

use std::fmt;

use hbnb_foundation::{EntityId, Error, Result, Timestamp, Value};

use crate::registry::Kind;
use crate::schema::{CLASS_KEY, is_protected};
use crate::serialize::Record;

/// Builds the table key `"<Kind>.<id>"`.
#[must_use]
pub fn composite_key(kind: &str, id: &str) -> String {
    format!("{kind}.{id}")
}

/// A stored record of one registered kind.
///
/// The id and `created_at` never change after construction. `updated_at` only
/// moves through [`Entity::touch`], which the store calls on every mutating
/// save.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    kind: Kind,
    id: EntityId,
    created_at: Timestamp,
    updated_at: Timestamp,
    fields: Vec<(String, Value)>,
}

impl Entity {
    pub(crate) fn from_parts(
        kind: Kind,
        id: EntityId,
        created_at: Timestamp,
        updated_at: Timestamp,
        fields: Vec<(String, Value)>,
    ) -> Self {
        Self {
            kind,
            id,
            created_at,
            updated_at,
            fields,
        }
    }

    /// Returns the entity's kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the entity's id.
    #[must_use]
    pub const fn id(&self) -> &EntityId {
        &self.id
    }

    /// Returns when the entity was constructed.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the entity was last saved through a mutating operation.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns the table key for this entity.
    #[must_use]
    pub fn key(&self) -> String {
        composite_key(self.kind.name(), self.id.as_str())
    }

    /// Returns a field's value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns true if the entity carries the named field.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over fields in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Sets a field directly, returning the previous value.
    ///
    /// This does not refresh `updated_at` and does not persist anything; the
    /// store's update operations do both. Unknown names are appended as new
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` for identity and timestamp fields.
    pub fn set(&mut self, name: &str, value: Value) -> Result<Option<Value>> {
        if is_protected(name) {
            return Err(Error::unknown_field(self.kind.name(), name));
        }
        if let Some((_, slot)) = self.fields.iter_mut().find(|(field, _)| field == name) {
            return Ok(Some(std::mem::replace(slot, value)));
        }
        self.fields.push((name.to_string(), value));
        Ok(None)
    }

    /// Advances `updated_at` strictly past its previous value.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now_after(self.updated_at);
    }

    /// Produces the flat serialized record: identity, timestamps, every
    /// field, then the kind discriminator.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a field value cannot be encoded.
    pub fn to_record(&self) -> Result<Record> {
        let mut record = Record::new();
        record.insert("id".to_string(), self.id.as_str().into());
        record.insert("created_at".to_string(), self.created_at.to_string().into());
        record.insert("updated_at".to_string(), self.updated_at.to_string().into());
        for (name, value) in &self.fields {
            let encoded = serde_json::to_value(value)
                .map_err(|e| Error::serialization(format!("field '{name}': {e}")))?;
            record.insert(name.clone(), encoded);
        }
        record.insert(CLASS_KEY.to_string(), self.kind.name().into());
        Ok(record)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {{'id': {}, 'created_at': {}, 'updated_at': {}",
            self.kind,
            self.id,
            Value::from(self.id.as_str()).repr(),
            Value::from(self.created_at.to_string()).repr(),
            Value::from(self.updated_at.to_string()).repr(),
        )?;
        for (name, value) in &self.fields {
            write!(f, ", {}: {}", Value::from(name.as_str()).repr(), value.repr())?;
        }
        write!(f, "}}")
    }
}
