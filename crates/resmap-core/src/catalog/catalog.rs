//! Catalog of entity type descriptors.

use super::entity::EntityDef;
use crate::error::Error;
use std::collections::HashMap;

/// The metadata catalog, keyed by resource type name.
///
/// Built by registration and immutable afterwards; descriptors are
/// treated as immutable values for the catalog's lifetime. Callers that
/// cache results derived from a descriptor own their own invalidation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entities: HashMap<String, EntityDef>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity definition.
    pub fn with_entity(mut self, entity: EntityDef) -> Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    /// Get an entity definition by type name.
    pub fn get_entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(name)
    }

    /// Resolve the descriptor for a type, failing if it is unknown.
    pub fn describe(&self, entity_type: &str) -> Result<&EntityDef, Error> {
        self.entities
            .get(entity_type)
            .ok_or_else(|| Error::UnknownType {
                entity_type: entity_type.to_string(),
            })
    }

    /// List all registered type names.
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.keys().map(String::as_str).collect()
    }
}
