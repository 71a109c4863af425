//! Core error types.

use thiserror::Error;

/// Core mapping errors.
///
/// Every error propagates synchronously to the caller; nothing is
/// retried or defaulted inside the core.
#[derive(Debug, Error)]
pub enum Error {
    /// No metadata descriptor is registered for the entity type.
    #[error("unknown entity type: {entity_type}")]
    UnknownType {
        /// The unregistered type name.
        entity_type: String,
    },

    /// Payload referenced an association with no matching metadata.
    #[error("unknown association {name} on entity type {entity_type}")]
    UnknownAssociation {
        /// Entity type the payload targeted.
        entity_type: String,
        /// Internal field name derived from the payload key.
        name: String,
    },

    /// A to-one association was supplied with a reference sequence.
    #[error("association {name} on entity type {entity_type} is to-one, payload is a sequence")]
    CardinalityMismatch {
        /// Entity type the payload targeted.
        entity_type: String,
        /// Internal field name of the association.
        name: String,
    },

    /// A referenced (type, id) did not resolve to an entity.
    #[error("dangling reference: no entity of type {entity_type} with id {id}")]
    DanglingReference {
        /// Referenced resource type.
        entity_type: String,
        /// Referenced identifier.
        id: String,
    },

    /// Field accessor invoked on a field absent from the entity.
    ///
    /// Signals a metadata/entity mismatch rather than a bad request.
    #[error("no field {field} on entity of type {entity_type}")]
    FieldAccess {
        /// Type of the entity that rejected the access.
        entity_type: String,
        /// The missing field name.
        field: String,
    },

    /// Wire payload error.
    #[error("payload error: {0}")]
    Payload(#[from] resmap_proto::Error),
}
