//! Relationship binding for inbound creation payloads.

use crate::catalog::{Catalog, Cardinality};
use crate::entity::{EntityHandle, EntityStore, FieldAccess, FieldValue};
use crate::error::Error;
use crate::serialize::from_wire_case;
use resmap_proto::{RelationshipsPayload, ResourceIdentifier, ResourceLinkage};
use std::sync::Arc;
use tracing::debug;

/// Resolves and attaches relationship references onto a target entity.
///
/// Cardinality comes from association metadata, never from payload
/// shape: a to-many association supplied with a single reference still
/// attaches as a one-element collection.
pub struct RelationshipBinder {
    catalog: Arc<Catalog>,
    store: Arc<dyn EntityStore>,
}

impl RelationshipBinder {
    /// Create a binder over a catalog and a lookup collaborator.
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn EntityStore>) -> Self {
        Self { catalog, store }
    }

    /// Bind every relationship in the payload onto the target entity.
    ///
    /// Relationships attach in payload order. A dangling reference
    /// aborts the call; references attached before the failure stay
    /// attached. Atomicity of bind-plus-persist belongs to the
    /// surrounding transaction boundary, not to this component.
    pub fn bind(
        &self,
        entity: &mut dyn FieldAccess,
        payload: &RelationshipsPayload,
    ) -> Result<(), Error> {
        let entity_type = entity.entity_type().to_string();
        let descriptor = self.catalog.describe(&entity_type)?;

        for (wire_name, linkage) in payload.iter() {
            let field = from_wire_case(wire_name);
            let association =
                descriptor
                    .get_association(&field)
                    .ok_or_else(|| Error::UnknownAssociation {
                        entity_type: entity_type.clone(),
                        name: field.clone(),
                    })?;

            match association.cardinality {
                Cardinality::One => {
                    let reference = match linkage {
                        ResourceLinkage::One(reference) => reference,
                        ResourceLinkage::Many(_) => {
                            return Err(Error::CardinalityMismatch {
                                entity_type: entity_type.clone(),
                                name: field.clone(),
                            });
                        }
                    };
                    let related = self.resolve(reference)?;
                    debug!(
                        entity_type = %entity_type,
                        field = %field,
                        target = %reference.resource_type,
                        id = %reference.id,
                        "attach to-one reference"
                    );
                    entity.set_field(&field, FieldValue::One(related))?;
                }
                Cardinality::Many => {
                    let mut attached = match entity.get_field(&field)? {
                        FieldValue::Many(existing) => existing,
                        _ => Vec::new(),
                    };
                    for reference in linkage.identifiers() {
                        match self.resolve(reference) {
                            Ok(related) => attached.push(related),
                            Err(err) => {
                                // References resolved before the failure
                                // stay attached; no rollback here.
                                entity.set_field(&field, FieldValue::Many(attached))?;
                                return Err(err);
                            }
                        }
                    }
                    debug!(
                        entity_type = %entity_type,
                        field = %field,
                        count = attached.len(),
                        "attach to-many references"
                    );
                    entity.set_field(&field, FieldValue::Many(attached))?;
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, reference: &ResourceIdentifier) -> Result<EntityHandle, Error> {
        self.store
            .find_by_type_and_id(&reference.resource_type, &reference.id)
            .ok_or_else(|| Error::DanglingReference {
                entity_type: reference.resource_type.clone(),
                id: reference.id.clone(),
            })
    }
}
