//! entgen CLI - Prisma to ent schema generator
//!
//! Commands:
//! - `entgen generate` - Write one ent schema file per Prisma model (default)
//! - `entgen check` - Validate config and model document without writing
//! - `entgen init` - Create a starter entgen.toml

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

mod config;
mod generate;
mod go;
mod init;
mod logging;

use config::{Config, Overrides};
use init::InitOptions;

#[derive(Parser)]
#[command(name = "entgen")]
#[command(author, version, about = "Generate ent schemas from Prisma models", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ent schema files
    Generate(GenerateArgs),

    /// Validate entgen.toml and render the model document in memory
    Check {
        /// Path to entgen.toml (default: ./entgen.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prisma DMMF JSON document
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// Create a starter entgen.toml in the current directory
    Init {
        /// Prisma DMMF JSON document (default: prisma/dmmf.json)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output directory for generated schemas (default: ent/schema)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing entgen.toml
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Path to entgen.toml (default: ./entgen.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prisma DMMF JSON document
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Output directory for generated schemas
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Go package of the generated files
    #[arg(short, long)]
    package: Option<String>,

    /// Run `go generate` on the ent package afterwards
    #[arg(long)]
    go_generate: bool,

    /// Print the generated files instead of writing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    {
        Commands::Generate(args) => {
            let config = Config::resolve(
                args.config.as_deref(),
                Overrides {
                    schema: args.schema,
                    output: args.output,
                    package: args.package,
                    log_level: cli.log_level,
                    go_generate: args.go_generate,
                },
            )?;
            logging::init_logging(&config.log_level);
            generate::run(&config, args.dry_run)?;
        }
        Commands::Check {
            config: config_path,
            schema,
        } => {
            let config = Config::resolve(
                config_path.as_deref(),
                Overrides {
                    schema,
                    log_level: cli.log_level,
                    ..Overrides::default()
                },
            )?;
            logging::init_logging(&config.log_level);
            config::check(config_path.as_deref(), &config)?;
        }
        Commands::Init {
            schema,
            output,
            force,
        } => {
            logging::init_logging(cli.log_level.as_deref().unwrap_or("info"));
            let defaults = InitOptions::default();
            init::run(
                Path::new("."),
                &InitOptions {
                    schema: schema.unwrap_or(defaults.schema),
                    output: output.unwrap_or(defaults.output),
                    force,
                },
            )?;
        }
    }

    Ok(())
}
