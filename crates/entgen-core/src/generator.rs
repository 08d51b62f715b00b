//! Generation driver: one schema file per entity.

use crate::render::{EntitySchema, SchemaTemplate};
use crate::{Document, Entity, GenerateResult, ModelIndex, TypeMapper, file_stem};
use std::path::PathBuf;

/// Options controlling where and how schema files are generated.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Directory the schema files are written to
    pub output_dir: PathBuf,

    /// Go package clause of every generated file
    pub package: String,

    /// File extension, without the dot
    pub extension: String,

    /// Source-to-ent type table
    pub types: TypeMapper,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("ent/schema"),
            package: "schema".to_string(),
            extension: "go".to_string(),
            types: TypeMapper::default(),
        }
    }
}

/// A rendered schema file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub source: String,
}

/// Renders documents into ent schema files.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Path of the file generated for the entity called `entity_name`
    pub fn path_for(&self, entity_name: &str) -> PathBuf {
        self.options
            .output_dir
            .join(format!("{}.{}", file_stem(entity_name), self.options.extension))
    }

    /// Render a single entity against a prebuilt index.
    pub fn render_entity(
        &self,
        entity: &Entity,
        index: &ModelIndex<'_>,
    ) -> GenerateResult<GeneratedFile> {
        let schema = EntitySchema::build(entity, index, &self.options.types)?;
        let source = SchemaTemplate::new(&self.options.package, &schema).render();

        Ok(GeneratedFile {
            path: self.path_for(&entity.name),
            source,
        })
    }

    /// Render every entity of `document`, in document order.
    ///
    /// The index is built once and shared read-only by every entity. The first
    /// fatal error aborts the run and nothing is returned.
    pub fn generate(&self, document: &Document) -> GenerateResult<Vec<GeneratedFile>> {
        let index = ModelIndex::build(document);

        tracing::debug!(
            entities = index.entity_count(),
            enums = index.enum_count(),
            "built model index"
        );

        document
            .entities
            .iter()
            .map(|entity| self.render_entity(entity, &index))
            .collect()
    }
}
