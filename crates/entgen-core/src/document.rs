//! Model document types.
//!
//! The document is the input to generation: a list of enums and a list of
//! entities, as produced by Prisma's DMMF (`getDMMF().datamodel`). Only the
//! parts the translation needs are modeled; other DMMF keys are ignored.
//!
//! # Accepted JSON shapes
//!
//! - a full DMMF object: `{"datamodel": {"enums": [...], "models": [...]}}`
//! - a bare datamodel: `{"enums": [...], "models": [...]}`
//!
//! `models` is required in either shape, so unrelated JSON is rejected.
//!
//! # Field kinds
//!
//! | DMMF `kind` | [`FieldKind`] |
//! |-------------|---------------|
//! | `scalar` | [`FieldKind::Scalar`] |
//! | `unsupported` | [`FieldKind::Scalar`] |
//! | `enum` | [`FieldKind::Enum`] |
//! | `object`, `relation` | [`FieldKind::Relation`] |

use crate::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full model description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Enum definitions, in declaration order
    #[serde(default)]
    pub enums: Vec<Enum>,

    /// Entity definitions, in declaration order
    #[serde(default, rename = "models")]
    pub entities: Vec<Entity>,
}

/// A named, ordered set of symbolic values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// One value of an [`Enum`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
}

/// One data-model type with named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A field of an [`Entity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,

    pub kind: FieldKind,

    /// Primitive name for scalars, enum name for enums, entity name for relations
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default = "default_required")]
    pub is_required: bool,

    #[serde(default)]
    pub default: Option<FieldDefault>,

    /// Names of the scalar fields on this entity that hold the relation's key
    #[serde(default)]
    pub relation_from_fields: Option<Vec<String>>,
}

/// Kind tag of a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[serde(alias = "unsupported")]
    Scalar,
    Enum,
    #[serde(rename = "object", alias = "relation")]
    Relation,
}

/// Default value attached to a field.
///
/// DMMF encodes literal defaults as bare JSON values and generated defaults
/// (`autoincrement()`, `now()`, `uuid()`) as objects; the latter land in
/// [`FieldDefault::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Other(serde_json::Value),
}

fn default_required() -> bool {
    true
}

/// Wire shape of a datamodel; unlike [`Document`], `models` is required.
#[derive(Deserialize)]
struct Datamodel {
    #[serde(default)]
    enums: Vec<Enum>,
    models: Vec<Entity>,
}

impl Document {
    /// Create a document from enum and entity lists
    pub fn new(enums: Vec<Enum>, entities: Vec<Entity>) -> Self {
        Self { enums, entities }
    }

    /// Parse a document from DMMF JSON.
    ///
    /// A top-level `datamodel` key selects the full DMMF shape and is decoded
    /// strictly; otherwise the object itself must be a datamodel.
    pub fn from_json(json: &str) -> GenerateResult<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        let datamodel = match value.get_mut("datamodel").map(serde_json::Value::take) {
            Some(datamodel) => datamodel,
            None => value,
        };

        let Datamodel { enums, models } = serde_json::from_value(datamodel)?;
        Ok(Self::new(enums, models))
    }

    /// Read and parse a DMMF JSON file
    pub fn from_file(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|err| GenerateError::io(path, err))?;

        Self::from_json(&content)
    }
}

impl Enum {
    /// Create an enum from its value names
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|value| EnumValue { name: value.into() })
                .collect(),
        }
    }

    /// Value names in definition order
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|value| value.name.as_str())
    }
}

impl Entity {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

impl Field {
    fn new(name: impl Into<String>, kind: FieldKind, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            ty: ty.into(),
            is_required: true,
            default: None,
            relation_from_fields: None,
        }
    }

    /// A required scalar field of primitive type `ty`
    pub fn scalar(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar, ty)
    }

    /// A required field typed by the enum named `enum_name`
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Enum, enum_name)
    }

    /// A required relation to `target`, keyed by the scalar fields in `from`
    pub fn relation<I, S>(name: impl Into<String>, target: impl Into<String>, from: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let from: Vec<String> = from.into_iter().map(Into::into).collect();
        let mut field = Self::new(name, FieldKind::Relation, target);
        field.relation_from_fields = Some(from);
        field
    }

    /// Mark the field as optional
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Attach a default value
    pub fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Key-carrying field names of a relation; empty for other kinds
    pub fn from_fields(&self) -> &[String] {
        self.relation_from_fields.as_deref().unwrap_or_default()
    }
}

impl From<bool> for FieldDefault {
    fn from(value: bool) -> Self {
        FieldDefault::Bool(value)
    }
}

impl From<&str> for FieldDefault {
    fn from(value: &str) -> Self {
        FieldDefault::String(value.to_string())
    }
}

impl From<i64> for FieldDefault {
    fn from(value: i64) -> Self {
        FieldDefault::Number(value.into())
    }
}

#[cfg(test)]
#[path = "document/document_tests.rs"]
mod document_tests;
