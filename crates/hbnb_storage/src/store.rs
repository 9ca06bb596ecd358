//! The object store: the in-memory table plus its JSON backing file.
//!
//! Every operation that changes the table writes the whole table back to
//! disk. The in-memory change always happens first; if the write then fails
//! the change is kept and the failure is reported to the caller once.

use std::path::Path;

use hbnb_foundation::{Error, ErrorKind, Result, Value};

use crate::config::StoreConfig;
use crate::entity::{Entity, composite_key};
use crate::registry::{Kind, Registry};
use crate::schema::is_protected;
use crate::serialize;
use crate::table::ObjectTable;

/// What [`ObjectStore::reload`] found on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The file was decoded; the table now holds `count` entities.
    Loaded {
        /// Number of entities read.
        count: usize,
    },
    /// There was no backing file; the table is empty.
    Missing,
    /// The file could not be read or decoded; the table is empty.
    Corrupt {
        /// Why decoding failed.
        reason: String,
    },
}

impl ReloadOutcome {
    /// Returns true if the store started from an empty table.
    #[must_use]
    pub const fn is_cold_start(&self) -> bool {
        !matches!(self, Self::Loaded { .. })
    }
}

/// The repository of every live entity, backed by a single JSON file.
#[derive(Debug)]
pub struct ObjectStore {
    config: StoreConfig,
    table: ObjectTable,
}

impl ObjectStore {
    /// Creates an empty store without touching the backing file.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            table: ObjectTable::new(),
        }
    }

    /// Creates a store and populates it from the backing file.
    ///
    /// A missing or unreadable file leaves the store empty.
    #[must_use]
    pub fn open(config: StoreConfig) -> Self {
        let mut store = Self::new(config);
        store.reload();
        store
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.config.file_path()
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registers an entity under its composite key without saving.
    pub fn insert(&mut self, entity: Entity) {
        let key = entity.key();
        if self.table.insert(entity).is_some() {
            tracing::debug!("replaced {key}");
        } else {
            tracing::debug!("inserted {key}");
        }
    }

    /// Constructs an entity of the named kind, registers it, and saves.
    ///
    /// # Errors
    ///
    /// Returns construction errors from [`Registry::construct`]. A
    /// persistence error means the entity was registered but not written.
    pub fn create<I>(&mut self, kind: &str, fields: I) -> Result<&Entity>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let entity = Registry::construct(kind, fields)?;
        let key = entity.key();
        self.insert(entity);
        self.save()?;
        self.table
            .get(&key)
            .ok_or_else(|| Error::new(ErrorKind::Internal(format!("{key} vanished after insert"))))
    }

    /// Writes the whole table to the backing file.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = self.path();
        match serialize::save_to_file(&self.table, path, self.config.pretty) {
            Ok(()) => {
                tracing::debug!("saved {} entities to {}", self.table.len(), path.display());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("save to {} failed: {e}", path.display());
                Err(e)
            }
        }
    }

    /// Replaces the table with the contents of the backing file.
    ///
    /// Never fails: a missing file or undecodable contents leave the table
    /// empty and are reported through the outcome.
    pub fn reload(&mut self) -> ReloadOutcome {
        let path = self.config.file_path.clone();
        let outcome = match serialize::load_from_file(&path) {
            Ok(Some(table)) => {
                let count = table.len();
                self.table = table;
                ReloadOutcome::Loaded { count }
            }
            Ok(None) => {
                self.table.clear();
                ReloadOutcome::Missing
            }
            Err(e) => {
                self.table.clear();
                let reason = match e.context {
                    Some(ref key) => format!("{key}: {e}"),
                    None => e.to_string(),
                };
                ReloadOutcome::Corrupt { reason }
            }
        };

        match &outcome {
            ReloadOutcome::Loaded { count } => {
                tracing::info!("loaded {count} entities from {}", path.display());
            }
            ReloadOutcome::Missing => {
                tracing::info!("no backing file at {}, starting empty", path.display());
            }
            ReloadOutcome::Corrupt { reason } => {
                tracing::warn!(
                    "could not decode {}, starting empty: {reason}",
                    path.display()
                );
            }
        }
        outcome
    }

    /// Looks an entity up by kind name and id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` if the kind is not registered, then
    /// `InstanceNotFound` if nothing is stored under that id.
    pub fn find_by_id(&self, kind: &str, id: &str) -> Result<&Entity> {
        let kind = Registry::kind(kind)?;
        self.table
            .get(&composite_key(kind.name(), id))
            .ok_or_else(|| Error::instance_not_found(kind.name(), id))
    }

    /// Looks an entity up for direct mutation.
    ///
    /// Changes made through the returned borrow do not refresh `updated_at`
    /// and are not saved until the next persisting operation.
    ///
    /// # Errors
    ///
    /// Same as [`ObjectStore::find_by_id`].
    pub fn find_by_id_mut(&mut self, kind: &str, id: &str) -> Result<&mut Entity> {
        let kind = Registry::kind(kind)?;
        self.table
            .get_mut(&composite_key(kind.name(), id))
            .ok_or_else(|| Error::instance_not_found(kind.name(), id))
    }

    /// Removes an entity and saves.
    ///
    /// # Errors
    ///
    /// Returns the lookup errors of [`ObjectStore::find_by_id`]. A
    /// persistence error means the entity was removed but the file still
    /// holds it.
    pub fn delete_by_id(&mut self, kind: &str, id: &str) -> Result<Entity> {
        let kind = Registry::kind(kind)?;
        let key = composite_key(kind.name(), id);
        let removed = self
            .table
            .remove(&key)
            .ok_or_else(|| Error::instance_not_found(kind.name(), id))?;
        tracing::debug!("removed {key}");
        self.save()?;
        Ok(removed)
    }

    /// Returns every entity, or every entity of one kind, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` if a kind is given and not registered.
    pub fn find_all(&self, kind: Option<&str>) -> Result<Vec<&Entity>> {
        match kind {
            Some(name) => {
                let kind = Registry::kind(name)?;
                Ok(self.table.iter_kind(kind).collect())
            }
            None => Ok(self.table.iter().collect()),
        }
    }

    /// Counts the entities of one kind.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` if the kind is not registered.
    pub fn count(&self, kind: &str) -> Result<usize> {
        let kind = Registry::kind(kind)?;
        Ok(self.table.iter_kind(kind).count())
    }

    /// Sets one field, refreshes `updated_at`, and saves.
    ///
    /// # Errors
    ///
    /// Returns the lookup errors of [`ObjectStore::find_by_id`],
    /// `UnknownField` for a protected field or one the entity does not carry,
    /// `InvalidValue` if the value cannot be coerced to the field's type, and
    /// a persistence error if the save fails after the field was set.
    pub fn update_field(&mut self, kind: &str, id: &str, field: &str, value: Value) -> Result<()> {
        self.update_fields(kind, id, vec![(field.to_string(), value)])
    }

    /// Sets several fields at once with a single refresh and save.
    ///
    /// Every change is validated before any is applied, so either all fields
    /// change or none do. An empty change list does nothing.
    ///
    /// # Errors
    ///
    /// Same as [`ObjectStore::update_field`].
    pub fn update_fields(
        &mut self,
        kind: &str,
        id: &str,
        changes: Vec<(String, Value)>,
    ) -> Result<()> {
        let entity = self.find_by_id_mut(kind, id)?;
        let changes = changes
            .into_iter()
            .map(|(field, value)| {
                let value = checked_value(entity, &field, value)?;
                Ok((field, value))
            })
            .collect::<Result<Vec<_>>>()?;
        if changes.is_empty() {
            return Ok(());
        }

        for (field, value) in changes {
            entity.set(&field, value)?;
        }
        entity.touch();
        tracing::debug!("updated {}", entity.key());
        self.save()
    }
}

/// Validates one update against the entity and its schema.
fn checked_value(entity: &Entity, field: &str, value: Value) -> Result<Value> {
    let kind: Kind = entity.kind();
    if is_protected(field) || !entity.has_field(field) {
        return Err(Error::unknown_field(kind.name(), field));
    }
    match kind.schema().field(field) {
        Some(schema) => schema
            .ty
            .coerce(value)
            .ok_or_else(|| Error::invalid_value(field, schema.ty.clone())),
        None => Ok(value),
    }
}
