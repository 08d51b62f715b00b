//! entgen-core - Translation engine from Prisma DMMF documents to ent schemas
//!
//! This crate turns a model document (entities, fields, enums, relations) into
//! one Go source file per entity written against the `entgo.io/ent` schema API:
//! - [`Document`] is the input model, loaded from DMMF JSON
//! - [`TypeMapper`] is the source-to-target primitive type table
//! - [`ModelIndex`] is the read-only lookup structure built once per run
//! - [`Generator`] renders every entity into a [`GeneratedFile`]
//! - [`Sink`] and [`persist`] hand the rendered files to storage
//!
//! # Pipeline
//!
//! ```text
//! DMMF JSON
//!     ↓
//!  Document ──→ ModelIndex (enums, entities, classified fields)
//!     ↓
//!  [Generator] ── FieldDecl / EdgeDecl ──→ SchemaTemplate
//!     ↓
//!  Vec<GeneratedFile> ──→ persist(Sink)
//! ```
//!
//! # Example
//!
//! ```rust
//! use entgen_core::{Document, Entity, Field, Generator, GeneratorOptions};
//!
//! let document = Document::new(
//!     vec![],
//!     vec![Entity::new("User", vec![Field::scalar("name", "String")])],
//! );
//!
//! let files = Generator::new(GeneratorOptions::default())
//!     .generate(&document)
//!     .unwrap();
//!
//! assert_eq!(files[0].path, std::path::Path::new("ent/schema/user.go"));
//! assert!(files[0].source.contains(r#"field.String("name"),"#));
//! ```

mod classify;
mod document;
mod error;
mod generator;
mod index;
mod naming;
mod render;
mod sink;
mod types;

pub use classify::{ClassifiedFields, classify};
pub use document::{Document, Entity, Enum, EnumValue, Field, FieldDefault, FieldKind};
pub use error::{GenerateError, GenerateResult};
pub use generator::{GeneratedFile, Generator, GeneratorOptions};
pub use index::ModelIndex;
pub use naming::file_stem;
pub use render::{DefaultLiteral, EdgeDecl, EntitySchema, FieldDecl, Modifier, SchemaTemplate};
pub use sink::{FsSink, MemorySink, Sink, persist};
pub use types::{TypeMapper, TypeMapping};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Document, Entity, Enum, Field, FieldKind, GenerateError, GenerateResult, GeneratedFile,
        Generator, GeneratorOptions, ModelIndex, Sink, TypeMapper, persist,
    };
}
