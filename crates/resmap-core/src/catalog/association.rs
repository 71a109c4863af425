//! Association definitions between entity types.

/// Cardinality of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one related entity.
    One,
    /// An ordered sequence of related entities.
    Many,
}

/// A typed link from one entity type to another.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationDef {
    /// Internal field name holding the association on the source entity.
    pub name: String,
    /// Wire-visible type of the related entities.
    pub target_type: String,
    /// Association cardinality.
    pub cardinality: Cardinality,
}

impl AssociationDef {
    /// Create a single-valued association.
    pub fn one(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
            cardinality: Cardinality::One,
        }
    }

    /// Create a collection-valued association.
    pub fn many(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
            cardinality: Cardinality::Many,
        }
    }

    /// Check if this association holds a collection.
    pub fn is_collection(&self) -> bool {
        self.cardinality == Cardinality::Many
    }
}
