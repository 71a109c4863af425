//! Entity lookup collaborator.

use super::access::EntityHandle;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Lookup collaborator used by the relationship binder.
///
/// Persistence lives outside the core; this trait is the narrow seam the
/// binder resolves references through.
pub trait EntityStore: Send + Sync {
    /// Find an entity by wire-visible type and identifier string.
    fn find_by_type_and_id(&self, entity_type: &str, id: &str) -> Option<EntityHandle>;
}

/// In-memory entity store.
///
/// Bundled implementation for tests and embedders without a real
/// persistence layer.
#[derive(Default)]
pub struct MemoryStore {
    entities: RwLock<HashMap<(String, String), EntityHandle>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under a (type, id) pair.
    pub fn insert(&self, entity_type: impl Into<String>, id: impl Into<String>, entity: EntityHandle) {
        self.entities
            .write()
            .insert((entity_type.into(), id.into()), entity);
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }
}

impl EntityStore for MemoryStore {
    fn find_by_type_and_id(&self, entity_type: &str, id: &str) -> Option<EntityHandle> {
        self.entities
            .read()
            .get(&(entity_type.to_string(), id.to_string()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Record;
    use resmap_proto::Value;

    #[test]
    fn test_lookup_by_type_and_id() {
        let store = MemoryStore::new();
        store.insert(
            "customers",
            "53",
            Record::new("customers")
                .with_scalar("id", Value::Int64(53))
                .into_handle(),
        );

        assert!(store.find_by_type_and_id("customers", "53").is_some());
        assert!(store.find_by_type_and_id("customers", "54").is_none());
        assert!(store.find_by_type_and_id("invoices", "53").is_none());
        assert_eq!(store.len(), 1);
    }
}
