//! Field definitions for entities.

use super::types::ValueKind;

/// A scalar field declaration within an entity definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Internal field name (field-case).
    pub name: String,
    /// Declared value kind, used for temporal rendering.
    pub kind: ValueKind,
    /// Visibility annotation; `None` defaults to visible.
    pub visible: Option<bool>,
}

impl FieldDef {
    /// Create a new field with no annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ValueKind::Plain,
            visible: None,
        }
    }

    /// Set the declared value kind.
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the visibility annotation explicitly.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Mark the field as hidden from attribute output.
    pub fn hidden(self) -> Self {
        self.with_visible(false)
    }

    /// Effective visibility: an absent annotation means visible.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = FieldDef::new("invoiceDate").with_kind(ValueKind::Date);

        assert_eq!(field.name, "invoiceDate");
        assert_eq!(field.kind, ValueKind::Date);
        assert!(field.is_visible());
    }

    #[test]
    fn test_visibility_tri_state() {
        assert!(FieldDef::new("a").is_visible());
        assert!(FieldDef::new("b").with_visible(true).is_visible());
        assert!(!FieldDef::new("c").hidden().is_visible());
    }
}
