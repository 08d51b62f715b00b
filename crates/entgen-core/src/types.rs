//! Type mappings from model primitives to ent field builders.
//!
//! The table is data, not control flow: adding a mapping never touches the
//! renderers. A source type missing from the table is *unmapped* and the
//! renderer drops the field.
//!
//! # Built-in Mappings
//!
//! | Source | ent builder | Literal argument |
//! |--------|-------------|------------------|
//! | `String` | `field.String` | |
//! | `Boolean` | `field.Bool` | |
//! | `Int` | `field.Int` | |
//! | `BigInt` | `field.Int64` | |
//! | `Float` | `field.Float` | |
//! | `Decimal` | `field.Float` | |
//! | `DateTime` | `field.Time` | |
//! | `Json` | `field.JSON` | `map[string]interface{}{}` |
//! | `Bytes` | `field.Bytes` | |

use std::collections::HashMap;

/// Zero value passed to `field.JSON` so ent can infer the Go type
const JSON_ZERO_VALUE: &str = "map[string]interface{}{}";

const BUILTIN: &[(&str, &str, Option<&str>)] = &[
    ("String", "String", None),
    ("Boolean", "Bool", None),
    ("Int", "Int", None),
    ("BigInt", "Int64", None),
    ("Float", "Float", None),
    ("Decimal", "Float", None),
    ("DateTime", "Time", None),
    ("Json", "JSON", Some(JSON_ZERO_VALUE)),
    ("Bytes", "Bytes", None),
];

/// Target of one source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    /// ent builder name (e.g. "String", "Time")
    pub target: String,

    /// Extra argument emitted after the field name, if the builder needs one
    pub literal: Option<String>,
}

impl TypeMapping {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            literal: None,
        }
    }

    pub fn with_literal(target: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            literal: Some(literal.into()),
        }
    }
}

/// Lookup table from source primitive names to ent builders.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    table: HashMap<String, TypeMapping>,
}

impl TypeMapper {
    /// A mapper with no entries; every type is unmapped
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Look up the mapping for a source type. `None` means unmapped.
    pub fn map(&self, source: &str) -> Option<&TypeMapping> {
        self.table.get(source)
    }

    /// Add or replace the mapping for `source`
    pub fn insert(&mut self, source: impl Into<String>, mapping: TypeMapping) {
        self.table.insert(source.into(), mapping);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_mapping(mut self, source: impl Into<String>, mapping: TypeMapping) -> Self {
        self.insert(source, mapping);
        self
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for TypeMapper {
    /// The built-in table
    fn default() -> Self {
        let table = BUILTIN
            .iter()
            .map(|(source, target, literal)| {
                let mapping = TypeMapping {
                    target: target.to_string(),
                    literal: literal.map(str::to_string),
                };
                (source.to_string(), mapping)
            })
            .collect();

        Self { table }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("String", "String")]
    #[test_case("Boolean", "Bool")]
    #[test_case("Int", "Int")]
    #[test_case("BigInt", "Int64")]
    #[test_case("Float", "Float")]
    #[test_case("Decimal", "Float")]
    #[test_case("DateTime", "Time")]
    #[test_case("Json", "JSON")]
    #[test_case("Bytes", "Bytes")]
    fn TypeMapper___default___maps_builtin(source: &str, target: &str) {
        let mapper = TypeMapper::default();

        assert_eq!(mapper.map(source).map(|m| m.target.as_str()), Some(target));
    }

    #[test_case("User"; "relation target")]
    #[test_case("Unsupported"; "unsupported column")]
    #[test_case("string"; "wrong case")]
    #[test_case(""; "empty")]
    fn TypeMapper___default___leaves_unknown_unmapped(source: &str) {
        assert!(TypeMapper::default().map(source).is_none());
    }

    #[test]
    fn TypeMapper___json___carries_zero_value_literal() {
        let mapper = TypeMapper::default();

        let json = mapper.map("Json").unwrap();

        assert_eq!(json.literal.as_deref(), Some("map[string]interface{}{}"));
    }

    #[test]
    fn TypeMapper___scalars___have_no_literal() {
        let mapper = TypeMapper::default();

        assert!(mapper.map("String").unwrap().literal.is_none());
        assert!(mapper.map("DateTime").unwrap().literal.is_none());
    }

    #[test]
    fn TypeMapper___with_mapping___adds_new_type() {
        let mapper = TypeMapper::default().with_mapping("Uuid", TypeMapping::new("UUID"));

        assert_eq!(mapper.map("Uuid"), Some(&TypeMapping::new("UUID")));
        assert_eq!(mapper.len(), 10);
    }

    #[test]
    fn TypeMapper___insert___overrides_builtin() {
        let mut mapper = TypeMapper::default();

        mapper.insert("Decimal", TypeMapping::new("Other"));

        assert_eq!(mapper.map("Decimal").unwrap().target, "Other");
        assert_eq!(mapper.len(), 9);
    }

    #[test]
    fn TypeMapper___empty___maps_nothing() {
        let mapper = TypeMapper::empty();

        assert!(mapper.is_empty());
        assert!(mapper.map("String").is_none());
    }
}
