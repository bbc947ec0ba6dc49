//! Tracing subscriber setup.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Builds the filter from `Config::log_level` (loaded from `RUST_LOG`).
///
/// # Errors
///
/// Returns an error if the level is not a valid filter directive.
pub fn env_filter(config: &Config) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))
}

/// Installs the global tracing subscriber.
///
/// `LOG_FORMAT=json` switches to one JSON object per line.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let env_filter = env_filter(config)?;

    match config.log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()?,
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .try_init()?,
    }

    Ok(())
}
