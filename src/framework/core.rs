//! # Core Registry
//!
//! This module defines the generic building blocks for the catalog's record management.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all registered record types must implement.
//! - [`Registry`]: The generic, insertion-ordered store that owns entities by id.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::debug;

/// Trait that any record must implement to be owned by a [`Registry`].
///
/// # Architecture Note
/// Items and members are stored the same way: keyed by an opaque id, listed in the
/// order they were registered. Writing the store once against this contract keeps the
/// [`Library`](crate::library::Library) free of bookkeeping code.
pub trait Entity: Debug {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Copy + Display + Debug;

    /// Short name used as the `entity_type` field in log events.
    const ENTITY_TYPE: &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;
}

/// An in-memory store of entities keyed by id.
///
/// Iteration yields entities in the order their ids were first inserted. Re-inserting an
/// existing id replaces the stored entity in place.
#[derive(Debug)]
pub struct Registry<T: Entity> {
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Stores `entity` under its own id, returning the entity it replaced, if any.
    pub fn insert(&mut self, entity: T) -> Option<T> {
        let id = entity.id();
        let replaced = self.store.insert(id, entity);
        if replaced.is_none() {
            self.order.push(id);
        }
        debug!(
            entity_type = T::ENTITY_TYPE,
            %id,
            replaced = replaced.is_some(),
            size = self.store.len(),
            "Stored"
        );
        replaced
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.store.get(id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.store.get_mut(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    /// Removes and returns the entity stored under `id`.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let removed = self.store.remove(id)?;
        self.order.retain(|existing| existing != id);
        debug!(entity_type = T::ENTITY_TYPE, %id, size = self.store.len(), "Removed");
        Some(removed)
    }

    /// Iterates over stored entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.store.get(id))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Shelf {
        id: u32,
        label: &'static str,
    }

    impl Entity for Shelf {
        type Id = u32;
        const ENTITY_TYPE: &'static str = "Shelf";

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn labels(registry: &Registry<Shelf>) -> Vec<&'static str> {
        registry.iter().map(|shelf| shelf.label).collect()
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut registry = Registry::new();
        for (id, label) in [(7, "fiction"), (2, "history"), (9, "science")] {
            registry.insert(Shelf { id, label });
        }

        assert_eq!(labels(&registry), vec!["fiction", "history", "science"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut registry = Registry::new();
        registry.insert(Shelf { id: 1, label: "old" });
        registry.insert(Shelf { id: 2, label: "other" });

        let replaced = registry.insert(Shelf { id: 1, label: "new" });

        assert_eq!(replaced, Some(Shelf { id: 1, label: "old" }));
        assert_eq!(labels(&registry), vec!["new", "other"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_drops_entity_and_order_slot() {
        let mut registry = Registry::new();
        registry.insert(Shelf { id: 1, label: "a" });
        registry.insert(Shelf { id: 2, label: "b" });

        assert!(registry.remove(&1).is_some());
        assert!(registry.remove(&1).is_none());
        assert!(!registry.contains(&1));
        assert_eq!(labels(&registry), vec!["b"]);
    }
}
