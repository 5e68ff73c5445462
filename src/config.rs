//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export STORE_URL="http://localhost:4000/store"
//! export BASE_PATH="/api"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Required Variables
//!
//! - `STORE_URL` - Base URL of the upstream store service
//!
//! ## Optional Variables
//!
//! - `STORE_TIMEOUT_SECONDS` - Per-call timeout for store requests (default: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_PATH` - Mount path of the API; `/` mounts at the root (default: `/api`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-Proto` / `X-Forwarded-Host` (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub store_timeout_seconds: u64,
    pub listen_addr: String,
    /// Normalized mount path: empty for root, otherwise `/segment[/segment..]`.
    pub base_path: String,
    /// When true, links are rooted at the protocol and host reported by
    /// `X-Forwarded-Proto` / `X-Forwarded-Host`.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let store_url = env::var("STORE_URL").context("STORE_URL must be set")?;

        let store_timeout_seconds = env::var("STORE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_path = normalize_base_path(
            &env::var("BASE_PATH").unwrap_or_else(|_| "/api".to_string()),
        );

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            store_url,
            store_timeout_seconds,
            listen_addr,
            base_path,
            behind_proxy,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `store_url` is not an HTTP(S) URL
    /// - `store_timeout_seconds` is 0
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if !self.store_url.starts_with("http://") && !self.store_url.starts_with("https://") {
            anyhow::bail!(
                "STORE_URL must start with 'http://' or 'https://', got '{}'",
                self.store_url
            );
        }

        if self.store_timeout_seconds == 0 {
            anyhow::bail!("STORE_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Store: {} (timeout {}s)", self.store_url, self.store_timeout_seconds);
        tracing::info!(
            "  Base path: {}",
            if self.base_path.is_empty() { "/" } else { self.base_path.as_str() }
        );
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Normalizes a mount path to `/a/b` form, or the empty string for the root.
fn normalize_base_path(raw: &str) -> String {
    let segments: Vec<&str> = raw
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        String::new()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
