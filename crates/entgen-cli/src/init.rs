//! Init command implementation
//!
//! Writes a starter `entgen.toml` from an embedded template.

use crate::config::{DEFAULT_CONFIG_FILE, is_go_identifier};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TEMPLATE: &str = include_str!("../templates/entgen.toml.tmpl");

/// Context for template variable substitution
struct TemplateContext {
    /// Model document path (e.g., "prisma/dmmf.json")
    schema: String,
    /// Output directory (e.g., "ent/schema")
    output_dir: String,
    /// Go package derived from the output directory (e.g., "schema")
    package: String,
}

impl TemplateContext {
    fn new(schema: &Path, output_dir: &Path) -> Self {
        Self {
            schema: toml_path(schema),
            output_dir: toml_path(output_dir),
            package: package_for(output_dir),
        }
    }

    /// Apply placeholder substitutions to template content
    fn apply(&self, template: &str) -> String {
        template
            .replace("{{schema}}", &self.schema)
            .replace("{{output-dir}}", &self.output_dir)
            .replace("{{package}}", &self.package)
    }
}

/// Path as a TOML basic-string body
fn toml_path(path: &Path) -> String {
    path.display()
        .to_string()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}

/// Package named after the output directory, or `schema` if that is not a Go identifier
fn package_for(output_dir: &Path) -> String {
    output_dir
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| is_go_identifier(name))
        .unwrap_or("schema")
        .to_string()
}

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub schema: PathBuf,
    pub output: PathBuf,
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("prisma/dmmf.json"),
            output: PathBuf::from("ent/schema"),
            force: false,
        }
    }
}

/// Run the init command, writing into `dir`
pub fn run(dir: &Path, options: &InitOptions) -> Result<PathBuf> {
    let path = dir.join(DEFAULT_CONFIG_FILE);

    if path.exists() && !options.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let ctx = TemplateContext::new(&options.schema, &options.output);
    fs::write(&path, ctx.apply(CONFIG_TEMPLATE))
        .with_context(|| format!("Failed to write config: {:?}", path))?;

    tracing::info!(path = %path.display(), "wrote starter config");
    println!("✓ Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Export the Prisma DMMF to {}", options.schema.display());
    println!("  2. Run `entgen generate`");

    Ok(path)
}
