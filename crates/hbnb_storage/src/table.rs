//! The in-memory object table.
//!
//! Entities are keyed by their composite key and iterated in insertion
//! order. Replacing an entity under an existing key keeps its position.

use im::{HashMap, Vector};

use crate::entity::Entity;
use crate::registry::Kind;

/// Entities keyed by `"<Kind>.<id>"`, remembering insertion order.
#[derive(Clone, Debug, Default)]
pub struct ObjectTable {
    entries: HashMap<String, Entity>,
    order: Vector<String>,
}

impl ObjectTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entity is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up an entity by composite key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entity> {
        self.entries.get(key)
    }

    /// Looks up an entity by composite key for mutation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entity> {
        self.entries.get_mut(key)
    }

    /// Stores an entity under its composite key, returning any entity it
    /// replaced.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        let key = entity.key();
        let previous = self.entries.insert(key.clone(), entity);
        if previous.is_none() {
            self.order.push_back(key);
        }
        previous
    }

    /// Removes and returns the entity under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Entity> {
        let removed = self.entries.remove(key)?;
        if let Some(index) = self.order.index_of(&key.to_string()) {
            self.order.remove(index);
        }
        Some(removed)
    }

    /// Iterates over every entity in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Iterates over entities of one kind in insertion order.
    pub fn iter_kind(&self, kind: Kind) -> impl Iterator<Item = &Entity> {
        self.iter().filter(move |entity| entity.kind() == kind)
    }

    /// Removes every entity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl FromIterator<Entity> for ObjectTable {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut table = Self::new();
        for entity in iter {
            table.insert(entity);
        }
        table
    }
}
