//! The field access capability.

use crate::error::Error;
use parking_lot::RwLock;
use resmap_proto::Value;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an externally owned entity.
pub type EntityHandle = Arc<RwLock<dyn FieldAccess>>;

/// A field value as seen through the access capability.
///
/// Association fields hold entity handles; the variant tag carries the
/// attachment cardinality, so the binder branches on metadata and the
/// value shape stays honest about what is attached.
#[derive(Clone)]
pub enum FieldValue {
    /// Scalar attribute value.
    Scalar(Value),
    /// Single-valued association.
    One(EntityHandle),
    /// Collection-valued association, in attachment order.
    Many(Vec<EntityHandle>),
}

impl FieldValue {
    /// Create a scalar field value.
    pub fn scalar(value: impl Into<Value>) -> Self {
        FieldValue::Scalar(value.into())
    }

    /// Try to view as a scalar value.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Try to view as a single attached entity.
    pub fn as_one(&self) -> Option<&EntityHandle> {
        match self {
            FieldValue::One(handle) => Some(handle),
            _ => None,
        }
    }

    /// Try to view as an attached collection.
    pub fn as_many(&self) -> Option<&[EntityHandle]> {
        match self {
            FieldValue::Many(handles) => Some(handles),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            FieldValue::One(handle) => {
                write!(f, "One({})", handle.read().entity_type())
            }
            FieldValue::Many(handles) => {
                write!(f, "Many(len={})", handles.len())
            }
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Scalar(value)
    }
}

/// Generic get/set-by-name capability over an entity's declared fields.
///
/// Implementations are typically generated per entity type or backed by
/// a dynamic record (see [`super::Record`]); either way, this capability
/// is the only path through which the core touches entity state.
pub trait FieldAccess: Send + Sync {
    /// Wire-visible entity type name.
    fn entity_type(&self) -> &str;

    /// Declared field names, in declaration order.
    fn field_names(&self) -> Vec<String>;

    /// Read a field's value. Fails if the field is not declared.
    fn get_field(&self, field: &str) -> Result<FieldValue, Error>;

    /// Write a field's value. Fails if the field is not declared.
    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), Error>;
}
