//! The entity serializer and its attribute extraction engine.

use super::cache::{CacheStore, FieldSetFingerprint};
use super::case::{from_wire_case, to_wire_case};
use crate::catalog::Catalog;
use crate::coerce;
use crate::entity::{FieldAccess, FieldValue};
use crate::error::Error;
use resmap_proto::{AttributeMap, ResourceObject};
use std::sync::Arc;
use tracing::debug;

/// Maps entities to resource objects.
///
/// Attribute extraction walks the merged field set of the entity's
/// descriptor and the entity's own declared fields, applies visibility
/// and filter rules, and renders temporal values. The resulting map is
/// memoized per (entity type, requested field set) in the injected
/// cache store; see [`EntitySerializer::attributes_of`] for the
/// staleness contract.
pub struct EntitySerializer {
    catalog: Arc<Catalog>,
    cache: Arc<dyn CacheStore>,
}

impl EntitySerializer {
    /// Create a serializer over a catalog and a cache store.
    pub fn new(catalog: Arc<Catalog>, cache: Arc<dyn CacheStore>) -> Self {
        Self { catalog, cache }
    }

    /// Serialize an entity into a resource object.
    pub fn serialize(
        &self,
        entity: &dyn FieldAccess,
        fields: Option<&[String]>,
    ) -> Result<ResourceObject, Error> {
        let id = self.resource_id(entity)?;
        let attributes = self.attributes_of(entity, fields)?;
        Ok(ResourceObject::new(id, entity.entity_type(), attributes))
    }

    /// Read the entity's identifier field and render it as a string.
    pub fn resource_id(&self, entity: &dyn FieldAccess) -> Result<String, Error> {
        let descriptor = self.catalog.describe(entity.entity_type())?;
        match entity.get_field(&descriptor.id_field)? {
            FieldValue::Scalar(value) => Ok(value.to_id_string()),
            // An identifier field holding entity handles is a
            // metadata/entity mismatch.
            _ => Err(Error::FieldAccess {
                entity_type: entity.entity_type().to_string(),
                field: descriptor.id_field.clone(),
            }),
        }
    }

    /// Compute (or fetch) the attribute map for an entity under an
    /// optional field filter.
    ///
    /// Filters arrive in wire case and may come in any order; they are
    /// normalized and canonicalized before keying, so set-equal filters
    /// share one cache entry. An empty or absent filter means no
    /// filtering.
    ///
    /// Maps are memoized per (entity type, field set): a cache hit
    /// returns the first-computed map even if the entity's field values
    /// changed since. Extraction is pure given the same metadata and
    /// filter, so the memo trades staleness for not re-walking metadata
    /// on every serialization of a hot type.
    pub fn attributes_of(
        &self,
        entity: &dyn FieldAccess,
        fields: Option<&[String]>,
    ) -> Result<AttributeMap, Error> {
        let entity_type = entity.entity_type();

        let normalized: Vec<String> = fields
            .unwrap_or(&[])
            .iter()
            .map(|field| from_wire_case(field))
            .collect();

        let key = FieldSetFingerprint::new(entity_type, &normalized);
        if let Some(attributes) = self.cache.get(&key) {
            debug!(key = ?key, "attribute cache hit");
            return Ok(attributes);
        }
        debug!(key = ?key, "attribute cache miss");

        let descriptor = self.catalog.describe(entity_type)?;

        // Metadata-declared fields first, entity-only fields appended.
        let mut merged: Vec<String> = descriptor
            .attribute_field_names()
            .map(str::to_string)
            .collect();
        for field in entity.field_names() {
            if !merged.contains(&field) {
                merged.push(field);
            }
        }

        let mut attributes = AttributeMap::new();
        for field in &merged {
            if descriptor.is_association(field) {
                continue;
            }
            if *field == descriptor.id_field {
                continue;
            }
            if !normalized.is_empty() && !normalized.contains(field) {
                continue;
            }

            let declared = descriptor.get_field(field);
            if let Some(def) = declared {
                if !def.is_visible() {
                    continue;
                }
            }

            let kind = declared.map(|def| def.kind).unwrap_or_default();
            if let FieldValue::Scalar(value) = entity.get_field(field)? {
                attributes.insert(to_wire_case(field), coerce::coerce(&value, kind));
            }
        }

        self.cache.set(key, attributes.clone());
        Ok(attributes)
    }

    /// Apply an inbound attributes payload onto an entity.
    ///
    /// Wire-case keys translate to internal field names; values for
    /// fields with a declared temporal kind are parsed into timestamps.
    /// Writes go through the entity's accessor in document order, so a
    /// failing write leaves earlier fields applied.
    pub fn apply_attributes(
        &self,
        entity: &mut dyn FieldAccess,
        attributes: &AttributeMap,
    ) -> Result<(), Error> {
        let entity_type = entity.entity_type().to_string();
        let descriptor = self.catalog.describe(&entity_type)?;

        for (wire_name, value) in attributes.iter() {
            let field = from_wire_case(wire_name);
            let kind = descriptor
                .get_field(&field)
                .map(|def| def.kind)
                .unwrap_or_default();
            let value = coerce::parse_wire_value(value.clone(), kind);
            entity.set_field(&field, FieldValue::Scalar(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssociationDef, EntityDef, FieldDef, ValueKind};
    use crate::entity::Record;
    use crate::serialize::MemoryCache;
    use chrono::NaiveDate;
    use resmap_proto::Value;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new().with_entity(
                EntityDef::new("invoices", "id")
                    .with_field(FieldDef::new("id"))
                    .with_field(FieldDef::new("invoiceDate").with_kind(ValueKind::Date))
                    .with_field(FieldDef::new("billingAddress"))
                    .with_field(FieldDef::new("internalNote").hidden())
                    .with_association(AssociationDef::one("customers", "customers")),
            ),
        )
    }

    fn serializer() -> EntitySerializer {
        EntitySerializer::new(catalog(), Arc::new(MemoryCache::new()))
    }

    fn invoice() -> Record {
        let date = NaiveDate::from_ymd_opt(2018, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Record::new("invoices")
            .with_scalar("id", Value::Int64(1))
            .with_scalar("invoiceDate", Value::Timestamp(date))
            .with_scalar("billingAddress", "River street 14")
            .with_scalar("internalNote", "do not ship")
            .with_field("customers", FieldValue::Scalar(Value::Null))
    }

    #[test]
    fn test_serialize_produces_id_type_attributes() {
        let resource = serializer().serialize(&invoice(), None).unwrap();

        assert_eq!(resource.id, "1");
        assert_eq!(resource.resource_type, "invoices");
        assert_eq!(
            resource.attributes.get("billing-address"),
            Some(&Value::from("River street 14"))
        );
    }

    #[test]
    fn test_id_and_association_never_emitted() {
        let attributes = serializer().attributes_of(&invoice(), None).unwrap();

        assert!(!attributes.contains("id"));
        assert!(!attributes.contains("customers"));
    }

    #[test]
    fn test_hidden_field_never_emitted() {
        let serializer = serializer();
        let attributes = serializer.attributes_of(&invoice(), None).unwrap();
        assert!(!attributes.contains("internal-note"));

        // A filter naming the hidden field does not resurface it.
        let filter = vec!["internal-note".to_string()];
        let filtered = serializer
            .attributes_of(&invoice(), Some(&filter))
            .unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_temporal_rendering_follows_annotation() {
        let attributes = serializer().attributes_of(&invoice(), None).unwrap();
        assert_eq!(
            attributes.get("invoice-date"),
            Some(&Value::from("2018-01-01"))
        );
    }

    #[test]
    fn test_filter_restricts_output() {
        let filter = vec!["billing-address".to_string()];
        let attributes = serializer()
            .attributes_of(&invoice(), Some(&filter))
            .unwrap();

        assert_eq!(attributes.len(), 1);
        assert!(attributes.contains("billing-address"));
    }

    #[test]
    fn test_entity_only_fields_are_appended() {
        let entity = invoice().with_scalar("looseEnd", "extra");
        let attributes = serializer().attributes_of(&entity, None).unwrap();

        let names: Vec<&str> = attributes.names().collect();
        assert_eq!(names.last(), Some(&"loose-end"));
    }

    #[test]
    fn test_unknown_type_propagates() {
        let entity = Record::new("ghosts").with_scalar("id", Value::Int64(1));
        let err = serializer().serialize(&entity, None).unwrap_err();
        assert!(matches!(err, Error::UnknownType { .. }));
    }

    #[test]
    fn test_apply_attributes_parses_temporal_strings() {
        let serializer = serializer();
        let mut entity = invoice();
        let payload = AttributeMap::new()
            .with_attribute("invoice-date", "2018-02-03")
            .with_attribute("billing-address", "Harbor lane 3");

        serializer.apply_attributes(&mut entity, &payload).unwrap();

        let expected = NaiveDate::from_ymd_opt(2018, 2, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            entity.get_field("invoiceDate").unwrap().as_scalar(),
            Some(&Value::Timestamp(expected))
        );
        assert_eq!(
            entity.get_field("billingAddress").unwrap().as_scalar(),
            Some(&Value::from("Harbor lane 3"))
        );
    }

    #[test]
    fn test_apply_attributes_unknown_field_fails() {
        let serializer = serializer();
        let mut entity = invoice();
        let payload = AttributeMap::new().with_attribute("no-such-field", "x");

        let err = serializer.apply_attributes(&mut entity, &payload).unwrap_err();
        assert!(matches!(err, Error::FieldAccess { field, .. } if field == "noSuchField"));
    }
}
