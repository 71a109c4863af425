//! RESMAP Core - Metadata catalog, attribute extraction, and
//! relationship binding.
//!
//! This crate maps in-memory entities to resource objects and maps
//! inbound resource payloads back onto entities. Persistence, metadata
//! sourcing, and request parsing live behind narrow trait seams
//! ([`entity::EntityStore`], [`entity::FieldAccess`],
//! [`serialize::CacheStore`]); the core owns the metadata walk, the
//! memoized attribute extraction, and the cardinality-aware attachment
//! protocol.

pub mod bind;
pub mod catalog;
pub mod coerce;
pub mod entity;
pub mod error;
pub mod serialize;

pub use bind::RelationshipBinder;
pub use catalog::{AssociationDef, Cardinality, Catalog, EntityDef, FieldDef, ValueKind};
pub use entity::{EntityHandle, EntityStore, FieldAccess, FieldValue, MemoryStore, Record};
pub use error::Error;
pub use serialize::{
    CacheStats, CacheStore, EntitySerializer, FieldSetFingerprint, MemoryCache,
};

/// Re-export protocol types.
pub use resmap_proto as proto;
