//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional.
//!
//! ## Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `3000`)
//! - `BASE_URL` - Prefix of generated short URLs (default: `http://localhost:{PORT}`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_BATCH_SIZE` - Upper bound for UUID count and password length (default: 10000)
//! - `MAX_QR_SIZE` - Upper bound for QR image size in pixels (default: 2048)
//! - `BCRYPT_COST` - bcrypt cost factor, 4 to 31 (default: 10)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::services::Limits;
use crate::utils::hashing::DEFAULT_BCRYPT_COST;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Prefix of generated short URLs, without trailing slash.
    pub base_url: String,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
    pub max_batch_size: usize,
    pub max_qr_size: u32,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 3000)?;

        let base_url = env::var("BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_batch_size = parse_var("MAX_BATCH_SIZE", 10_000)?;
        let max_qr_size = parse_var("MAX_QR_SIZE", 2048)?;
        let bcrypt_cost = parse_var("BCRYPT_COST", DEFAULT_BCRYPT_COST)?;

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            log_level,
            log_format,
            max_batch_size,
            max_qr_size,
            bcrypt_cost,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `base_url` is not an http(s) URL
    /// - `max_batch_size` or `max_qr_size` is zero
    /// - `bcrypt_cost` is outside `4..=31`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.max_batch_size == 0 {
            anyhow::bail!("MAX_BATCH_SIZE must be greater than 0");
        }

        if self.max_qr_size == 0 {
            anyhow::bail!("MAX_QR_SIZE must be greater than 0");
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            anyhow::bail!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                self.bcrypt_cost
            );
        }

        Ok(())
    }

    /// Bind address in `host:port` form.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Input bounds handed to the utility service.
    pub fn limits(&self) -> Limits {
        Limits {
            max_batch_size: self.max_batch_size,
            max_qr_size: self.max_qr_size,
            bcrypt_cost: self.bcrypt_cost,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Limits: batch={} qr={}px bcrypt_cost={}",
            self.max_batch_size,
            self.max_qr_size,
            self.bcrypt_cost
        );
    }
}

/// Reads an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if parsing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
