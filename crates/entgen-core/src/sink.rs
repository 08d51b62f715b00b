//! Persistence of generated files.
//!
//! A [`Sink`] is where generated files go. [`FsSink`] writes to disk,
//! [`MemorySink`] keeps everything in memory for previews and tests.
//! [`persist`] ensures the output directory once, then writes all files
//! concurrently.

use crate::{GenerateError, GenerateResult, GeneratedFile};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Storage for generated files.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Make sure `path` exists as a directory
    async fn ensure_directory(&self, path: &Path) -> GenerateResult<()>;

    /// Create or overwrite the file at `path`
    async fn write_file(&self, path: &Path, content: &str) -> GenerateResult<()>;
}

/// Writes files to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

#[async_trait]
impl Sink for FsSink {
    async fn ensure_directory(&self, path: &Path) -> GenerateResult<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|err| GenerateError::io(path, err))
    }

    async fn write_file(&self, path: &Path, content: &str) -> GenerateResult<()> {
        tokio::fs::write(path, content)
            .await
            .map_err(|err| GenerateError::io(path, err))
    }
}

/// Keeps generated files in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    directories: Mutex<Vec<PathBuf>>,
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directories ensured so far, in call order
    pub fn directories(&self) -> Vec<PathBuf> {
        self.directories.lock().clone()
    }

    /// Written files keyed by path
    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.files.lock().clone()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().get(path.as_ref()).cloned()
    }
}

#[async_trait]
impl Sink for MemorySink {
    async fn ensure_directory(&self, path: &Path) -> GenerateResult<()> {
        self.directories.lock().push(path.to_path_buf());
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> GenerateResult<()> {
        self.files
            .lock()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Write `files` into `output_dir` through `sink`.
///
/// The directory is ensured exactly once before any write starts; the writes
/// then run concurrently. Returns the number of files written. On failure the
/// first error is returned; files already written are left in place.
pub async fn persist<S>(
    sink: Arc<S>,
    output_dir: &Path,
    files: Vec<GeneratedFile>,
) -> GenerateResult<usize>
where
    S: Sink + ?Sized + 'static,
{
    sink.ensure_directory(output_dir).await?;

    let mut tasks = JoinSet::new();
    for file in files {
        let sink = Arc::clone(&sink);
        tasks.spawn(async move {
            sink.write_file(&file.path, &file.source).await?;
            tracing::debug!(path = %file.path.display(), "wrote schema file");
            Ok::<_, GenerateError>(())
        });
    }

    let mut written = 0;
    while let Some(joined) = tasks.join_next().await {
        joined.map_err(|err| GenerateError::Task(err.to_string()))??;
        written += 1;
    }

    Ok(written)
}
