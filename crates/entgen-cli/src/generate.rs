//! Generate command implementation

use crate::config::Config;
use crate::go;
use anyhow::{Context, Result};
use entgen_core::{Document, FsSink, GeneratedFile, Generator, MemorySink, Sink, persist};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Run the generate command
pub fn run(config: &Config, dry_run: bool) -> Result<()> {
    println!("Reading model document: {}", config.schema.display());

    let document = Document::from_file(&config.schema)
        .with_context(|| format!("Failed to load model document: {:?}", config.schema))?;

    let output_dir = config.output.dir.as_path();
    let files = render(config, &document)?;
    let runtime = runtime()?;

    if dry_run {
        let sink = Arc::new(MemorySink::new());
        runtime.block_on(write(Arc::clone(&sink), output_dir, files))?;
        print!("{}", preview(&sink));
        println!("Dry run: nothing written to {}", output_dir.display());
        return Ok(());
    }

    let written = runtime.block_on(write(Arc::new(FsSink), output_dir, files))?;

    tracing::info!(
        files = written,
        output = %output_dir.display(),
        "generated ent schemas"
    );
    println!(
        "✓ Generated {written} schema file(s) in {}",
        output_dir.display()
    );

    if config.go_generate {
        go::generate(output_dir)?;
    }

    println!("\nDone!");
    Ok(())
}

/// Render every model of `document` with the configured options
pub fn render(config: &Config, document: &Document) -> Result<Vec<GeneratedFile>> {
    Generator::new(config.generator_options())
        .generate(document)
        .context("Failed to render schemas")
}

/// Persist `files` through `sink`
pub async fn write<S>(sink: Arc<S>, output_dir: &Path, files: Vec<GeneratedFile>) -> Result<usize>
where
    S: Sink + ?Sized + 'static,
{
    persist(sink, output_dir, files)
        .await
        .with_context(|| format!("Failed to write schemas to {:?}", output_dir))
}

/// Dry-run listing: every file, headed by its path
pub fn preview(sink: &MemorySink) -> String {
    let mut out = String::new();
    for (path, source) in sink.files() {
        let _ = writeln!(out, "// ---- {} ----", path.display());
        out.push_str(&source);
        out.push('\n');
    }
    out
}

fn runtime() -> Result<Runtime> {
    Builder::new_multi_thread()
        .thread_name("entgen-writer")
        .enable_all()
        .build()
        .context("Failed to create async runtime")
}
