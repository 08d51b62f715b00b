//! Field declarations.

use super::go_quote;
use crate::{
    ClassifiedFields, Field, FieldDefault, FieldKind, GenerateError, GenerateResult, ModelIndex,
    TypeMapper,
};
use std::fmt;

/// A default value ent can take as a Go literal.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultLiteral {
    Bool(bool),
    Number(String),
    String(String),
}

impl DefaultLiteral {
    /// Convert a document default. Non-literal shapes (generator calls such as
    /// `now()` or `autoincrement()`) have no literal and return `None`.
    pub fn from_default(default: &FieldDefault) -> Option<Self> {
        match default {
            FieldDefault::Bool(value) => Some(DefaultLiteral::Bool(*value)),
            FieldDefault::Number(value) => Some(DefaultLiteral::Number(value.to_string())),
            FieldDefault::String(value) => Some(DefaultLiteral::String(value.clone())),
            FieldDefault::Other(_) => None,
        }
    }
}

impl fmt::Display for DefaultLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultLiteral::Bool(value) => write!(f, "{value}"),
            DefaultLiteral::Number(value) => f.write_str(value),
            DefaultLiteral::String(value) => f.write_str(&go_quote(value)),
        }
    }
}

/// Qualifier chained after a field builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    Optional,
    Default(DefaultLiteral),
}

impl Modifier {
    /// Modifiers for `field`, optional first and default second.
    pub fn for_field(field: &Field) -> Vec<Modifier> {
        let mut modifiers = Vec::with_capacity(2);

        if !field.is_required {
            modifiers.push(Modifier::Optional);
        }

        if let Some(default) = &field.default {
            match DefaultLiteral::from_default(default) {
                Some(literal) => modifiers.push(Modifier::Default(literal)),
                None => tracing::debug!(
                    field = %field.name,
                    "omitting default without a literal form"
                ),
            }
        }

        modifiers
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Optional => f.write_str(".Optional()"),
            Modifier::Default(literal) => write!(f, ".Default({literal})"),
        }
    }
}

/// One entry of an entity's `Fields()` list.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDecl {
    /// `field.<builder>("<name>"[, <literal>])`
    Typed {
        builder: String,
        name: String,
        literal: Option<String>,
        modifiers: Vec<Modifier>,
    },
    /// `field.Enum("<name>").Values(...)`
    Enum {
        name: String,
        values: Vec<String>,
        modifiers: Vec<Modifier>,
    },
}

impl FieldDecl {
    pub fn name(&self) -> &str {
        match self {
            FieldDecl::Typed { name, .. } | FieldDecl::Enum { name, .. } => name,
        }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            FieldDecl::Typed { modifiers, .. } | FieldDecl::Enum { modifiers, .. } => modifiers,
        }
    }
}

impl fmt::Display for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDecl::Typed {
                builder,
                name,
                literal,
                ..
            } => {
                write!(f, "field.{builder}({}", go_quote(name))?;
                if let Some(literal) = literal {
                    write!(f, ", {literal}")?;
                }
                f.write_str(")")?;
            }
            FieldDecl::Enum { name, values, .. } => {
                let values: Vec<String> = values.iter().map(|v| go_quote(v)).collect();
                write!(
                    f,
                    "field.Enum({}).Values({})",
                    go_quote(name),
                    values.join(",")
                )?;
            }
        }

        for modifier in self.modifiers() {
            write!(f, "{modifier}")?;
        }

        Ok(())
    }
}

/// Decide the declaration for `field`.
///
/// Returns `Ok(None)` for fields that produce no declaration: relations
/// (rendered as edges), relation key scalars, and scalars whose type has no
/// mapping. An enum field whose enum is not in `index` is an error.
pub(crate) fn render_field(
    field: &Field,
    classified: &ClassifiedFields<'_>,
    index: &ModelIndex<'_>,
    types: &TypeMapper,
) -> GenerateResult<Option<FieldDecl>> {
    match field.kind {
        FieldKind::Relation => Ok(None),
        FieldKind::Enum => {
            let definition =
                index
                    .enum_def(&field.ty)
                    .ok_or_else(|| GenerateError::MissingEnum {
                        entity: classified.entity.name.clone(),
                        field: field.name.clone(),
                        enum_name: field.ty.clone(),
                    })?;

            Ok(Some(FieldDecl::Enum {
                name: field.name.clone(),
                values: definition.value_names().map(str::to_string).collect(),
                modifiers: Modifier::for_field(field),
            }))
        }
        FieldKind::Scalar => {
            if classified.is_relation_key(&field.name) {
                return Ok(None);
            }

            let Some(mapping) = types.map(&field.ty) else {
                tracing::debug!(
                    entity = %classified.entity.name,
                    field = %field.name,
                    ty = %field.ty,
                    "skipping field with unmapped type"
                );
                return Ok(None);
            };

            Ok(Some(FieldDecl::Typed {
                builder: mapping.target.clone(),
                name: field.name.clone(),
                literal: mapping.literal.clone(),
                modifiers: Modifier::for_field(field),
            }))
        }
    }
}
