//! The fixed set of entity kinds and the registry that constructs them.
//!
//! The registry is how the rest of the system goes from a kind name typed by
//! a user (or read from the backing file) to a validated [`Kind`] and a fully
//! populated [`Entity`].

use std::fmt;
use std::sync::LazyLock;

use hbnb_foundation::{EntityId, Error, Result, Timestamp, Type, Value};

use crate::entity::Entity;
use crate::schema::{CLASS_KEY, FieldSchema, KindSchema, is_protected};
use crate::serialize::Record;

/// A registered entity kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// Bare record with identity and timestamps only.
    BaseModel,
    /// A registered user account.
    User,
    /// A state or province.
    State,
    /// A city inside a state.
    City,
    /// A feature a place can offer.
    Amenity,
    /// A rentable place.
    Place,
    /// A user's review of a place.
    Review,
}

impl Kind {
    /// Every kind, in registration order.
    pub const ALL: [Kind; 7] = [
        Kind::BaseModel,
        Kind::User,
        Kind::State,
        Kind::City,
        Kind::Amenity,
        Kind::Place,
        Kind::Review,
    ];

    /// Returns the kind's registered name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BaseModel => "BaseModel",
            Self::User => "User",
            Self::State => "State",
            Self::City => "City",
            Self::Amenity => "Amenity",
            Self::Place => "Place",
            Self::Review => "Review",
        }
    }

    /// Looks a kind up by its exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns the kind's field schema.
    #[must_use]
    pub fn schema(self) -> &'static KindSchema {
        &SCHEMAS[self as usize]
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static SCHEMAS: LazyLock<[KindSchema; 7]> = LazyLock::new(|| Kind::ALL.map(standard_schema));

fn standard_schema(kind: Kind) -> KindSchema {
    let schema = KindSchema::new(kind.name());
    match kind {
        Kind::BaseModel => schema,
        Kind::User => schema
            .with_field(FieldSchema::new("email", Type::String))
            .with_field(FieldSchema::new("password", Type::String))
            .with_field(FieldSchema::new("first_name", Type::String))
            .with_field(FieldSchema::new("last_name", Type::String)),
        Kind::State | Kind::Amenity => schema.with_field(FieldSchema::new("name", Type::String)),
        Kind::City => schema
            .with_field(FieldSchema::new("state_id", Type::String))
            .with_field(FieldSchema::new("name", Type::String)),
        Kind::Place => schema
            .with_field(FieldSchema::new("city_id", Type::String))
            .with_field(FieldSchema::new("user_id", Type::String))
            .with_field(FieldSchema::new("name", Type::String))
            .with_field(FieldSchema::new("description", Type::String))
            .with_field(FieldSchema::new("number_rooms", Type::Int))
            .with_field(FieldSchema::new("number_bathrooms", Type::Int))
            .with_field(FieldSchema::new("max_guest", Type::Int))
            .with_field(FieldSchema::new("price_by_night", Type::Int))
            .with_field(FieldSchema::new("latitude", Type::Float))
            .with_field(FieldSchema::new("longitude", Type::Float))
            .with_field(FieldSchema::new("amenity_ids", Type::list(Type::String))),
        Kind::Review => schema
            .with_field(FieldSchema::new("place_id", Type::String))
            .with_field(FieldSchema::new("user_id", Type::String))
            .with_field(FieldSchema::new("text", Type::String)),
    }
}

/// Maps kind names to schemas and builds entities from them.
pub struct Registry;

impl Registry {
    /// Returns true if `name` is a registered kind.
    #[must_use]
    pub fn is_registered(name: &str) -> bool {
        Kind::from_name(name).is_some()
    }

    /// Resolves a kind name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` if the name is not registered.
    pub fn kind(name: &str) -> Result<Kind> {
        Kind::from_name(name).ok_or_else(|| Error::unknown_kind(name))
    }

    /// Returns every registered kind name, in registration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Kind::ALL.into_iter().map(Kind::name)
    }

    /// Constructs a fresh entity of the named kind.
    ///
    /// The entity gets a new id and `created_at == updated_at == now`.
    /// Fields not supplied take their schema default; supplied values are
    /// coerced to the field's declared type. The entity is not stored.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` for an unregistered name, `UnknownField` for a
    /// protected or undeclared field, and `InvalidValue` if a value cannot be
    /// coerced.
    pub fn construct<I>(name: &str, fields: I) -> Result<Entity>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let kind = Self::kind(name)?;
        let schema = kind.schema();

        let mut values = schema.defaults();
        for (field, value) in fields {
            let Some(field_schema) = schema.field(&field).filter(|_| !is_protected(&field)) else {
                return Err(Error::unknown_field(kind.name(), field));
            };
            let value = field_schema
                .ty
                .coerce(value)
                .ok_or_else(|| Error::invalid_value(field.as_str(), field_schema.ty.clone()))?;
            if let Some(slot) = values.iter_mut().find(|(name, _)| *name == field) {
                slot.1 = value;
            }
        }

        let now = Timestamp::now();
        Ok(Entity::from_parts(kind, EntityId::generate(), now, now, values))
    }

    /// Rebuilds an entity from a serialized record.
    ///
    /// The kind comes from the record's discriminator, the id is taken
    /// verbatim, and both timestamps are parsed from their fixed format.
    /// Schema fields come first in schema order (defaulted if absent),
    /// followed by any other keys in record order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` for an unregistered discriminator and a
    /// serialization error for a missing id, discriminator, or timestamp, or
    /// for a schema field whose stored value does not fit its type.
    pub fn deserialize(record: &Record) -> Result<Entity> {
        let kind = Self::kind(required_str(record, CLASS_KEY)?)?;
        let id = EntityId::new(required_str(record, "id")?);
        let created_at = Timestamp::parse(required_str(record, "created_at")?)?;
        let updated_at = Timestamp::parse(required_str(record, "updated_at")?)?;

        let schema = kind.schema();
        let mut values = Vec::with_capacity(record.len());
        for field in &schema.fields {
            let value = match record.get(field.name) {
                Some(raw) => {
                    let value = decode_value(field.name, raw)?;
                    field.ty.coerce(value).ok_or_else(|| {
                        Error::serialization(format!(
                            "field '{}' does not hold a {}",
                            field.name, field.ty
                        ))
                    })?
                }
                None => field.default_value(),
            };
            values.push((field.name.to_string(), value));
        }
        for (key, raw) in record {
            if is_protected(key) || schema.field(key).is_some() {
                continue;
            }
            values.push((key.clone(), decode_value(key, raw)?));
        }

        Ok(Entity::from_parts(kind, id, created_at, updated_at, values))
    }

    /// Produces the serialized record for an entity.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a field value cannot be encoded.
    pub fn serialize(entity: &Entity) -> Result<Record> {
        entity.to_record()
    }
}

fn required_str<'a>(record: &'a Record, key: &str) -> Result<&'a str> {
    record
        .get(key)
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::serialization(format!("record is missing string field '{key}'")))
}

fn decode_value(key: &str, raw: &serde_json::Value) -> Result<Value> {
    serde_json::from_value(raw.clone())
        .map_err(|e| Error::serialization(format!("field '{key}': {e}")))
}
