//! Downstream `go generate` step

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Package holding ent's `generate.go`: the parent of the schema directory
pub fn ent_package_dir(output_dir: &Path) -> PathBuf {
    match output_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Run `go generate` in the ent package owning `output_dir`
pub fn generate(output_dir: &Path) -> Result<()> {
    let package_dir = ent_package_dir(output_dir);

    println!("Running go generate in: {}", package_dir.display());

    let mut cmd = Command::new("go");
    cmd.arg("generate").arg(".").current_dir(&package_dir);

    let status = cmd.status().context("Failed to execute go generate")?;

    if status.success() {
        tracing::info!(package = %package_dir.display(), "go generate finished");
        println!("✓ go generate successful!");
    } else {
        anyhow::bail!("go generate failed with exit code: {:?}", status.code());
    }

    Ok(())
}
