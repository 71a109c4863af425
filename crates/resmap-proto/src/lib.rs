//! RESMAP protocol types.
//!
//! This crate defines the wire-level shapes RESMAP exchanges with the
//! outside world: serialized resource objects on the way out, and
//! relationship/attribute payloads on the way in. JSON is the wire
//! format; all types carry serde implementations.
//!
//! # Modules
//!
//! - [`value`] - Runtime scalar values for attributes
//! - [`resource`] - Resource objects and the ordered attribute map
//! - [`payload`] - Inbound relationship payload types
//! - [`error`] - Wire-level error types
//!
//! Maps preserve insertion/document order throughout: attribute output
//! follows metadata declaration order, and inbound payloads are applied
//! in the order the document lists them.

pub mod error;
pub mod payload;
pub mod resource;
pub mod value;

pub use error::Error;

// Re-export commonly used types at crate root
pub use payload::{RelationshipsPayload, ResourceIdentifier, ResourceLinkage};
pub use resource::{AttributeMap, ResourceObject};
pub use value::Value;
