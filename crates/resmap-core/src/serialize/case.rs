//! Naming convention translation.
//!
//! Field names cross the wire in kebab form and live internally in
//! camel form.

use convert_case::{Case, Casing};

/// Convert an internal field name to its wire-case form.
pub fn to_wire_case(name: &str) -> String {
    name.to_case(Case::Kebab)
}

/// Convert a wire-case name to the internal field-case form.
pub fn from_wire_case(name: &str) -> String {
    name.to_case(Case::Camel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wire_case() {
        assert_eq!(to_wire_case("invoiceDate"), "invoice-date");
        assert_eq!(to_wire_case("billingPostalCode"), "billing-postal-code");
        assert_eq!(to_wire_case("total"), "total");
    }

    #[test]
    fn test_from_wire_case() {
        assert_eq!(from_wire_case("invoice-date"), "invoiceDate");
        assert_eq!(from_wire_case("invoice-items"), "invoiceItems");
        assert_eq!(from_wire_case("total"), "total");
    }

    #[test]
    fn test_roundtrip() {
        for name in ["invoiceDate", "billingAddress", "total"] {
            assert_eq!(from_wire_case(&to_wire_case(name)), name);
        }
    }
}
