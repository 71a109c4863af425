//! Entity definitions.

use super::association::AssociationDef;
use super::field::FieldDef;

/// An entity definition: one per logical resource type.
///
/// `name` is the wire-visible resource type. Declared fields and
/// associations are disjoint sets; the id field may be declared as a
/// field but is never emitted in attribute output.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDef {
    /// Resource type name (unique within a catalog).
    pub name: String,
    /// Internal name of the identifier field.
    pub id_field: String,
    /// Scalar field declarations, insertion ordered.
    pub fields: Vec<FieldDef>,
    /// Association declarations.
    pub associations: Vec<AssociationDef>,
}

impl EntityDef {
    /// Create a new entity definition.
    pub fn new(name: impl Into<String>, id_field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_field: id_field.into(),
            fields: Vec::new(),
            associations: Vec::new(),
        }
    }

    /// Add a field declaration.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple field declarations.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add an association declaration.
    pub fn with_association(mut self, association: AssociationDef) -> Self {
        self.associations.push(association);
        self
    }

    /// Get a field declaration by internal name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get an association declaration by internal name.
    pub fn get_association(&self, name: &str) -> Option<&AssociationDef> {
        self.associations.iter().find(|a| a.name == name)
    }

    /// Check whether a field name is a declared association.
    pub fn is_association(&self, name: &str) -> bool {
        self.get_association(name).is_some()
    }

    /// Declared attribute field names, in declaration order.
    pub fn attribute_field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Cardinality, ValueKind};

    #[test]
    fn test_entity_builder() {
        let entity = EntityDef::new("invoices", "id")
            .with_field(FieldDef::new("id"))
            .with_field(FieldDef::new("invoiceDate").with_kind(ValueKind::Date))
            .with_field(FieldDef::new("total"))
            .with_association(AssociationDef::one("customers", "customers"));

        assert_eq!(entity.name, "invoices");
        assert_eq!(entity.id_field, "id");
        assert_eq!(entity.fields.len(), 3);
        assert_eq!(entity.associations.len(), 1);
    }

    #[test]
    fn test_lookups() {
        let entity = EntityDef::new("invoices", "id")
            .with_field(FieldDef::new("total"))
            .with_association(AssociationDef::many("invoiceItems", "invoice-items"));

        assert!(entity.get_field("total").is_some());
        assert!(entity.get_field("missing").is_none());
        assert!(entity.is_association("invoiceItems"));
        assert!(!entity.is_association("total"));
        assert_eq!(
            entity.get_association("invoiceItems").unwrap().cardinality,
            Cardinality::Many
        );
    }

    #[test]
    fn test_attribute_field_names_keep_declaration_order() {
        let entity = EntityDef::new("invoices", "id")
            .with_fields([
                FieldDef::new("billingCity"),
                FieldDef::new("billingAddress"),
                FieldDef::new("total"),
            ]);

        let names: Vec<&str> = entity.attribute_field_names().collect();
        assert_eq!(names, vec!["billingCity", "billingAddress", "total"]);
    }
}
