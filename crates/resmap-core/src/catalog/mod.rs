//! Metadata catalog: per-type descriptors for entities, fields, and
//! associations.

mod association;
mod catalog;
mod entity;
mod field;
mod types;

pub use association::{AssociationDef, Cardinality};
pub use catalog::Catalog;
pub use entity::EntityDef;
pub use field::FieldDef;
pub use types::ValueKind;
