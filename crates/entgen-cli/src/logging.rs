//! Tracing subscriber setup for the CLI

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: a non-empty `RUST_LOG` wins over `level`
fn directive(env: Option<String>, level: &str) -> String {
    env.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

/// Initialize logging to stderr at `level`
pub fn init_logging(level: &str) {
    use tracing_subscriber::prelude::*;

    let directive = directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
