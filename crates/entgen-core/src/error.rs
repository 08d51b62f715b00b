//! Error types for schema generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Fatal errors raised while generating schemas.
///
/// Unmapped field types and unsupported default values are not errors: the
/// renderer drops the field or the default and carries on.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// An enum field references an enum the document does not define
    #[error("field `{entity}.{field}` references undefined enum `{enum_name}`")]
    MissingEnum {
        entity: String,
        field: String,
        enum_name: String,
    },

    /// The model document could not be decoded
    #[error("invalid model document: {0}")]
    Document(#[from] serde_json::Error),

    /// Filesystem failure while reading the document or writing output
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A concurrent write task panicked or was cancelled
    #[error("write task failed: {0}")]
    Task(String),
}

impl GenerateError {
    /// Wrap an I/O error with the path it occurred at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}
