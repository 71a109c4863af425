//! Dynamic map-backed entity.

use super::access::{EntityHandle, FieldAccess, FieldValue};
use crate::error::Error;
use parking_lot::RwLock;
use resmap_proto::Value;
use std::sync::Arc;

/// A dynamic entity whose fields are declared at construction.
///
/// This is the bundled [`FieldAccess`] implementation for environments
/// without generated accessors: fixtures, tests, and callers that build
/// entities from schema at runtime. Fields live in a declaration-ordered
/// vector; lookups are linear, field counts are small.
///
/// Access to undeclared fields fails with [`Error::FieldAccess`]; the
/// record never grows fields on write.
#[derive(Debug)]
pub struct Record {
    entity_type: String,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Create a record of the given entity type with no fields.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field with an initial value.
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Declare a scalar field.
    pub fn with_scalar(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_field(name, FieldValue::Scalar(value.into()))
    }

    /// Declare an empty collection-valued association field.
    pub fn with_collection(self, name: impl Into<String>) -> Self {
        self.with_field(name, FieldValue::Many(Vec::new()))
    }

    /// Wrap the record in a shared entity handle.
    pub fn into_handle(self) -> EntityHandle {
        Arc::new(RwLock::new(self))
    }

    fn missing(&self, field: &str) -> Error {
        Error::FieldAccess {
            entity_type: self.entity_type.clone(),
            field: field.to_string(),
        }
    }
}

impl FieldAccess for Record {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|(name, _)| name.clone()).collect()
    }

    fn get_field(&self, field: &str) -> Result<FieldValue, Error> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| self.missing(field))
    }

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), Error> {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => {
                entry.1 = value;
                Ok(())
            }
            None => Err(self.missing(field)),
        }
    }
}
