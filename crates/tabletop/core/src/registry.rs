//! Name-keyed template storage.
//!
//! A [`Registry`] is populated once with templates and then only read: tools
//! copy templates out of it but never write back. Iteration follows insertion
//! order, which is also the order `deal` materializes a full registry in.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::component::Component;
use crate::name::{Name, NameError, normalize};

/// Ordered mapping from registry key to template.
///
/// Keys are derived from the template's id unless an explicit name is given;
/// either way they go through the same normalization as ids. Keys are
/// independent of ids, so several keys may hold templates sharing an id.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(transparent, bound(serialize = "T: serde::Serialize"))
)]
pub struct Registry<T> {
    entries: IndexMap<Name, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: Component> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn key_for(entity: &T, name: Option<&str>) -> Result<Name, NameError> {
        match name {
            Some(raw) => Name::new(raw),
            None => Ok(entity.id().clone()),
        }
    }

    /// Registers `entity` under `name` (or its id).
    ///
    /// # Errors
    ///
    /// [`NameError::Invalid`] if the key fails validation,
    /// [`NameError::Duplicate`] if the key is already taken.
    pub fn add(&mut self, entity: T, name: Option<&str>) -> Result<Name, NameError> {
        let key = Self::key_for(&entity, name)?;
        if self.entries.contains_key(&key) {
            return Err(NameError::Duplicate(key.into()));
        }
        tracing::debug!(kind = T::KIND, name = %key, id = %entity.id(), "registered template");
        self.entries.insert(key.clone(), entity);
        Ok(key)
    }

    /// Registers `entity`, replacing any template stored under the same key.
    ///
    /// Returns the previous template. The key keeps its original position.
    pub fn replace(&mut self, entity: T, name: Option<&str>) -> Result<Option<T>, NameError> {
        let key = Self::key_for(&entity, name)?;
        tracing::debug!(kind = T::KIND, name = %key, id = %entity.id(), "replaced template");
        Ok(self.entries.insert(key, entity))
    }

    /// Registers every entity under its id.
    ///
    /// All keys are checked (against the registry and against each other)
    /// before anything is inserted, so a failure leaves the registry untouched.
    pub fn update(&mut self, entities: impl IntoIterator<Item = T>) -> Result<(), NameError> {
        let entities: Vec<T> = entities.into_iter().collect();
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            let key = entity.id();
            if self.entries.contains_key(key) || !seen.insert(key.clone()) {
                return Err(NameError::Duplicate(key.to_string()));
            }
        }
        for entity in entities {
            tracing::debug!(kind = T::KIND, name = %entity.id(), "registered template");
            self.entries.insert(entity.id().clone(), entity);
        }
        Ok(())
    }

    /// Template stored under `name` (normalized before lookup).
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(normalize(name).as_str())
    }

    /// Fresh instance of the template stored under `name`.
    pub fn copy_of(&self, name: &str) -> Option<T> {
        self.get(name).map(Component::copy)
    }

    /// First template, in iteration order, whose id equals `id`.
    pub fn by_id(&self, id: &str) -> Option<&T> {
        self.entries.values().find(|entity| entity.id() == id)
    }

    /// Ids of all templates in iteration order (not deduplicated).
    pub fn ids(&self) -> Vec<&Name> {
        self.entries.values().map(Component::id).collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &T)> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(normalize(name).as_str())
    }

    /// Removes the template stored under `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.entries.shift_remove(normalize(name).as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
