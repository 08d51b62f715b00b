//! Per-entity schema composition and the Go file template.

use super::{EdgeDecl, FieldDecl, render_edge, render_field};
use crate::{ClassifiedFields, Entity, GenerateResult, ModelIndex, TypeMapper, classify};
use std::fmt;

/// Everything declared for one entity, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySchema {
    pub name: String,
    pub fields: Vec<FieldDecl>,
    pub edges: Vec<EdgeDecl>,
}

impl EntitySchema {
    /// Build the declarations for `entity`.
    ///
    /// Edges come from the relation fields, fields from every other field in
    /// the entity's order, minus those the field renderer skips.
    pub fn build(
        entity: &Entity,
        index: &ModelIndex<'_>,
        types: &TypeMapper,
    ) -> GenerateResult<Self> {
        // The index holds one classification per name; a duplicated entity
        // name points it at another entity, so classify afresh in that case.
        let fresh: ClassifiedFields<'_>;
        let classified = match index.classified(&entity.name) {
            Some(classified) if std::ptr::eq(classified.entity, entity) => classified,
            _ => {
                fresh = classify(entity);
                &fresh
            }
        };

        let edges = classified
            .relations
            .iter()
            .map(|field| render_edge(field))
            .collect();

        let mut fields = Vec::with_capacity(entity.fields.len());
        for field in &entity.fields {
            if let Some(decl) = render_field(field, classified, index, types)? {
                fields.push(decl);
            }
        }

        tracing::trace!(
            entity = %entity.name,
            fields = fields.len(),
            "rendered entity schema"
        );

        Ok(Self {
            name: entity.name.clone(),
            fields,
            edges,
        })
    }
}

/// Import lines, each gated on whether the file uses the package.
#[derive(Debug, Clone, Copy)]
struct Imports {
    edge: bool,
    field: bool,
}

impl fmt::Display for Imports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("import (\n")?;
        f.write_str("\t\"entgo.io/ent\"\n")?;
        if self.edge {
            f.write_str("\t\"entgo.io/ent/schema/edge\"\n")?;
        }
        if self.field {
            f.write_str("\t\"entgo.io/ent/schema/field\"\n")?;
        }
        f.write_str(")\n")
    }
}

/// The Go source template for one entity schema.
///
/// ```text
/// package <package>
///
/// import (...)
///
/// // <Name> holds the schema definition for the <Name> entity.
/// type <Name> struct {
///     ent.Schema
/// }
///
/// // Fields of <Name>.
/// func (<Name>) Fields() []ent.Field { ... }
///
/// // Edges of <Name>.
/// func (<Name>) Edges() []ent.Edge { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemaTemplate<'a> {
    pub package: &'a str,
    pub schema: &'a EntitySchema,
}

impl<'a> SchemaTemplate<'a> {
    pub fn new(package: &'a str, schema: &'a EntitySchema) -> Self {
        Self { package, schema }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SchemaTemplate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.schema.name;
        let imports = Imports {
            edge: !self.schema.edges.is_empty(),
            field: !self.schema.fields.is_empty(),
        };

        writeln!(f, "package {}", self.package)?;
        writeln!(f)?;
        write!(f, "{imports}")?;
        writeln!(f)?;
        writeln!(
            f,
            "// {name} holds the schema definition for the {name} entity."
        )?;
        writeln!(f, "type {name} struct {{")?;
        writeln!(f, "\tent.Schema")?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "// Fields of {name}.")?;
        writeln!(f, "func ({name}) Fields() []ent.Field {{")?;
        write_list(f, "[]ent.Field", &self.schema.fields)?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "// Edges of {name}.")?;
        writeln!(f, "func ({name}) Edges() []ent.Edge {{")?;
        write_list(f, "[]ent.Edge", &self.schema.edges)?;
        writeln!(f, "}}")
    }
}

/// Write the `return` statement of an accessor; an empty list returns `nil`.
fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    slice_ty: &str,
    items: &[T],
) -> fmt::Result {
    if items.is_empty() {
        return writeln!(f, "\treturn nil");
    }

    writeln!(f, "\treturn {slice_ty}{{")?;
    for item in items {
        writeln!(f, "\t\t{item},")?;
    }
    writeln!(f, "\t}}")
}
