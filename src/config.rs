//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honored (loaded in `main.rs`).
//!
//! ```bash
//! export LISTEN="127.0.0.1:8082"
//! export STORAGE_PATH="storage/storage.db"
//! export APP_ENV="production"
//! ```
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `STORAGE_PATH` - SQLite database file (default: `storage/storage.db`)
//! - `APP_ENV` - Environment name (default: `development`)
//! - `RUST_LOG` - Log filter directives (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `SHUTDOWN_TIMEOUT` - Grace period for in-flight requests in seconds (default: 5)

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub storage_path: String,
    /// Free-form environment name, e.g. `development` or `production`.
    pub env: String,
    /// Filter directives for the subscriber (`RUST_LOG`, default: `info`).
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,

    /// Seconds allowed for in-flight requests after a shutdown signal
    /// (`SHUTDOWN_TIMEOUT`, default: 5).
    pub shutdown_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8082".to_string(),
            storage_path: "storage/storage.db".to_string(),
            env: "development".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
            shutdown_timeout: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            storage_path: env::var("STORAGE_PATH").unwrap_or(defaults.storage_path),
            env: env::var("APP_ENV").unwrap_or(defaults.env),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", defaults.db_connect_timeout),
            shutdown_timeout: parse_var("SHUTDOWN_TIMEOUT", defaults.shutdown_timeout),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `storage_path` or `env` is empty
    /// - `log_format` is not `text` or `json`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.env.trim().is_empty() {
            anyhow::bail!("APP_ENV must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Pool: {} connections, {}s acquire timeout",
            self.db_max_connections,
            self.db_connect_timeout
        );
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "LISTEN",
        "STORAGE_PATH",
        "APP_ENV",
        "RUST_LOG",
        "LOG_FORMAT",
        "DB_MAX_CONNECTIONS",
        "DB_CONNECT_TIMEOUT",
        "SHUTDOWN_TIMEOUT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "8082".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8082".to_string();

        // Test empty storage path
        config.storage_path = "  ".to_string();
        assert!(config.validate().is_err());

        config.storage_path = "data/students.db".to_string();

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test empty pool
        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:8082");
        assert_eq!(config.storage_path, "storage/storage.db");
        assert_eq!(config.env, "development");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.shutdown_grace(), Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("STORAGE_PATH", "/tmp/students.db");
            env::set_var("APP_ENV", "production");
            env::set_var("RUST_LOG", "warn,students_api=debug");
            env::set_var("DB_MAX_CONNECTIONS", "12");
            env::set_var("DB_CONNECT_TIMEOUT", "not-a-number");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.storage_path, "/tmp/students.db");
        assert_eq!(config.env, "production");
        assert_eq!(config.log_level, "warn,students_api=debug");
        assert_eq!(config.db_max_connections, 12);
        // Unparsable values fall back to the default
        assert_eq!(config.db_connect_timeout, 30);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_bad_format() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
