//! Inbound relationship payload types.

use crate::error::Error;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// A typed reference to a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// Target resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Target resource identifier.
    pub id: String,
}

impl ResourceIdentifier {
    /// Create a new resource identifier.
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// Linkage data for one relationship key.
///
/// On the wire this is either a single `{type, id}` object or an ordered
/// array of such objects. The payload shape does NOT decide cardinality;
/// the binder reads cardinality from metadata and treats a single
/// reference against a to-many association as a one-element sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceLinkage {
    /// A single reference.
    One(ResourceIdentifier),
    /// An ordered sequence of references.
    Many(Vec<ResourceIdentifier>),
}

impl ResourceLinkage {
    /// View the linkage as an ordered slice of identifiers.
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match self {
            ResourceLinkage::One(identifier) => std::slice::from_ref(identifier),
            ResourceLinkage::Many(identifiers) => identifiers,
        }
    }

    /// Check if the wire shape was an array.
    pub fn is_collection(&self) -> bool {
        matches!(self, ResourceLinkage::Many(_))
    }
}

/// The relationships section of a creation payload.
///
/// Maps wire-case association names to linkage data, preserving JSON
/// document order so attachment happens in payload order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationshipsPayload {
    entries: Vec<(String, ResourceLinkage)>,
}

impl RelationshipsPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry addition, for embedders constructing payloads
    /// programmatically.
    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        linkage: ResourceLinkage,
    ) -> Self {
        self.entries.push((name.into(), linkage));
        self
    }

    /// Parse a relationships payload from JSON.
    pub fn from_json(input: &str) -> Result<Self, Error> {
        serde_json::from_str(input).map_err(|e| Error::Deserialization(e.to_string()))
    }

    /// Get linkage data by wire-case name.
    pub fn get(&self, name: &str) -> Option<&ResourceLinkage> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, linkage)| linkage)
    }

    /// Iterate over (wire-case name, linkage) pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceLinkage)> {
        self.entries
            .iter()
            .map(|(name, linkage)| (name.as_str(), linkage))
    }

    /// Number of relationship keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the payload has no relationship keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RelationshipsPayload {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, linkage) in &self.entries {
            map.serialize_entry(name, linkage)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RelationshipsPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PayloadVisitor;

        impl<'de> Visitor<'de> for PayloadVisitor {
            type Value = RelationshipsPayload;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an object of relationship linkages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut payload = RelationshipsPayload::new();
                while let Some((name, linkage)) =
                    access.next_entry::<String, ResourceLinkage>()?
                {
                    payload.entries.push((name, linkage));
                }
                Ok(payload)
            }
        }

        deserializer.deserialize_map(PayloadVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_reference() {
        let payload = RelationshipsPayload::from_json(
            "{\"customers\": {\"type\": \"customers\", \"id\": \"53\"}}",
        )
        .unwrap();

        let linkage = payload.get("customers").unwrap();
        assert!(!linkage.is_collection());
        assert_eq!(
            linkage.identifiers(),
            &[ResourceIdentifier::new("customers", "53")]
        );
    }

    #[test]
    fn test_parse_reference_sequence() {
        let payload = RelationshipsPayload::from_json(
            "{\"invoice-items\": [\
                {\"type\": \"invoice-items\", \"id\": \"10\"},\
                {\"type\": \"invoice-items\", \"id\": \"11\"}\
            ]}",
        )
        .unwrap();

        let linkage = payload.get("invoice-items").unwrap();
        assert!(linkage.is_collection());
        assert_eq!(linkage.identifiers().len(), 2);
        assert_eq!(linkage.identifiers()[0].id, "10");
        assert_eq!(linkage.identifiers()[1].id, "11");
    }

    #[test]
    fn test_document_order_preserved() {
        let payload = RelationshipsPayload::from_json(
            "{\"customers\": {\"type\": \"customers\", \"id\": \"53\"},\
              \"invoice-items\": {\"type\": \"invoice-items\", \"id\": \"10\"}}",
        )
        .unwrap();

        let names: Vec<&str> = payload.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["customers", "invoice-items"]);
    }

    #[test]
    fn test_single_reference_views_as_one_element_slice() {
        let linkage = ResourceLinkage::One(ResourceIdentifier::new("invoice-items", "10"));
        assert_eq!(linkage.identifiers().len(), 1);
    }

    #[test]
    fn test_malformed_payload_rejected() {
        assert!(RelationshipsPayload::from_json("{\"customers\": 5}").is_err());
        assert!(RelationshipsPayload::from_json("[]").is_err());
    }
}
