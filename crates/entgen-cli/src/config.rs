//! Configuration parsing and validation

use anyhow::{Context, Result};
use entgen_core::{Document, Generator, GeneratorOptions, TypeMapper, TypeMapping};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "entgen.toml";

/// Accepted values of `log_level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// entgen.toml structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Prisma DMMF document to read
    #[serde(default = "default_schema")]
    pub schema: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Run `go generate` after writing
    #[serde(default)]
    pub go_generate: bool,

    #[serde(default)]
    pub output: OutputSection,

    /// Source type overrides, applied on top of the built-in table
    #[serde(default)]
    pub types: BTreeMap<String, TypeOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_package")]
    pub package: String,
}

/// Target of a `[types]` entry.
///
/// ```toml
/// [types]
/// Citext = "String"
/// Json = { target = "JSON", literal = "map[string]any{}" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeOverride {
    Builder(String),
    Detailed {
        target: String,
        #[serde(default)]
        literal: Option<String>,
    },
}

/// Command-line values that win over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub package: Option<String>,
    pub log_level: Option<String>,
    pub go_generate: bool,
}

fn default_schema() -> PathBuf {
    PathBuf::from("prisma/dmmf.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("ent/schema")
}

fn default_package() -> String {
    "schema".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            log_level: default_log_level(),
            go_generate: false,
            output: OutputSection::default(),
            types: BTreeMap::new(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            package: default_package(),
        }
    }
}

impl TypeOverride {
    pub fn target(&self) -> &str {
        match self {
            TypeOverride::Builder(target) => target,
            TypeOverride::Detailed { target, .. } => target,
        }
    }

    pub fn to_mapping(&self) -> TypeMapping {
        match self {
            TypeOverride::Builder(target) => TypeMapping::new(target.clone()),
            TypeOverride::Detailed { target, literal } => TypeMapping {
                target: target.clone(),
                literal: literal.clone(),
            },
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load the named config file, or `entgen.toml` if it exists, or defaults.
    ///
    /// Only an explicitly named file is required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load, apply command-line overrides, then validate.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(schema) = overrides.schema {
            self.schema = schema;
        }
        if let Some(dir) = overrides.output {
            self.output.dir = dir;
        }
        if let Some(package) = overrides.package {
            self.output.package = package;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self.go_generate |= overrides.go_generate;
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.output.dir.as_os_str().is_empty() {
            anyhow::bail!("Output directory cannot be empty");
        }

        if !is_go_identifier(&self.output.package) {
            anyhow::bail!(
                "Output package '{}' is not a valid Go package name",
                self.output.package
            );
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            );
        }

        for (source, target) in &self.types {
            if source.is_empty() {
                anyhow::bail!("Type override source cannot be empty");
            }
            if target.target().is_empty() {
                anyhow::bail!("Type override target cannot be empty for '{}'", source);
            }
        }

        Ok(())
    }

    /// Built-in type table with `[types]` applied
    pub fn type_mapper(&self) -> TypeMapper {
        let mut types = TypeMapper::default();
        for (source, target) in &self.types {
            types.insert(source.clone(), target.to_mapping());
        }
        types
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            output_dir: self.output.dir.clone(),
            package: self.output.package.clone(),
            types: self.type_mapper(),
            ..GeneratorOptions::default()
        }
    }
}

/// Check if `name` can be used as a Go package clause
pub fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|first| first == '_' || first.is_alphabetic());

    starts_well
        && chars.all(|c| c == '_' || c.is_alphanumeric())
        && !GO_KEYWORDS.contains(&name)
}

/// Check command implementation
pub fn check(config_path: Option<&Path>, config: &Config) -> Result<()> {
    let shown = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

    println!("Checking configuration: {}", shown.display());

    let document = Document::from_file(&config.schema)
        .with_context(|| format!("Failed to load model document: {:?}", config.schema))?;
    let files = Generator::new(config.generator_options())
        .generate(&document)
        .context("Failed to render schemas")?;

    println!("✓ Schema: {}", config.schema.display());
    println!(
        "✓ Output: {} (package {})",
        config.output.dir.display(),
        config.output.package
    );
    println!("✓ Enums: {}", document.enums.len());
    println!("✓ Models: {}", document.entities.len());
    println!("✓ Type overrides: {}", config.types.len());
    println!("✓ Rendered files: {}", files.len());
    println!("\nConfiguration is valid!");

    Ok(())
}
