//! Resource object types for serialized entities.

use crate::error::Error;
use crate::value::Value;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// An insertion-ordered map of wire-case attribute names to values.
///
/// Attribute order is part of the representation (fields are emitted in
/// the order the metadata declares them), so the map is backed by a
/// vector of pairs rather than an alphabetizing map type. Lookups are
/// linear; attribute sets are small.
///
/// The same type carries inbound attribute payloads, where it preserves
/// JSON document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeMap {
    entries: Vec<(String, Value)>,
}

impl AttributeMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a name, replacing in place if present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style insert.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get a value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate over attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Parse an attributes payload from JSON, preserving document order.
    pub fn from_json(input: &str) -> Result<Self, Error> {
        serde_json::from_str(input).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an object of attribute values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut attributes = AttributeMap::new();
                while let Some((name, value)) = access.next_entry::<String, Value>()? {
                    attributes.insert(name, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

/// The externally visible representation of an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceObject {
    /// Resource identifier, rendered as a string.
    pub id: String,
    /// Resource type (wire-visible entity type name).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Attribute map in declaration order.
    pub attributes: AttributeMap,
}

impl ResourceObject {
    /// Create a new resource object.
    pub fn new(
        id: impl Into<String>,
        resource_type: impl Into<String>,
        attributes: AttributeMap,
    ) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            attributes,
        }
    }

    /// Serialize the resource object to a JSON string.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut attributes = AttributeMap::new();
        attributes.insert("billing-city", "Westham");
        attributes.insert("billing-address", "River street 14");
        attributes.insert("total", "2.64");

        let names: Vec<&str> = attributes.names().collect();
        assert_eq!(names, vec!["billing-city", "billing-address", "total"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut attributes = AttributeMap::new();
        attributes.insert("total", "2.64");
        attributes.insert("currency", "EUR");
        attributes.insert("total", "3.10");

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("total"), Some(&Value::from("3.10")));
        let names: Vec<&str> = attributes.names().collect();
        assert_eq!(names, vec!["total", "currency"]);
    }

    #[test]
    fn test_serialize_in_order() {
        let attributes = AttributeMap::new()
            .with_attribute("billing-city", "Westham")
            .with_attribute("billing-address", "River street 14");

        let json = serde_json::to_string(&attributes).unwrap();
        assert_eq!(
            json,
            "{\"billing-city\":\"Westham\",\"billing-address\":\"River street 14\"}"
        );
    }

    #[test]
    fn test_payload_roundtrip_keeps_document_order() {
        let input = "{\"invoice-date\":\"2018-01-01 00:00:00\",\"billing-state\":null,\"total\":\"2.64\"}";
        let attributes = AttributeMap::from_json(input).unwrap();

        let names: Vec<&str> = attributes.names().collect();
        assert_eq!(names, vec!["invoice-date", "billing-state", "total"]);
        assert_eq!(attributes.get("billing-state"), Some(&Value::Null));
    }

    #[test]
    fn test_resource_object_json_shape() {
        let resource = ResourceObject::new(
            "53",
            "customers",
            AttributeMap::new().with_attribute("name", "Ada"),
        );

        let json = resource.to_json().unwrap();
        assert_eq!(
            json,
            "{\"id\":\"53\",\"type\":\"customers\",\"attributes\":{\"name\":\"Ada\"}}"
        );
    }
}
