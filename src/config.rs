//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (loaded by the
//! binaries through `dotenvy`).
//!
//! ```bash
//! export API_URL="https://api.vastdime.com"
//! export IDENTITY_API_KEY="AIza..."
//! ```
//!
//! ## Required Variables
//!
//! - `API_URL` - Base URL of the backend API (`http://` or `https://`)
//! - `IDENTITY_API_KEY` - Web API key of the identity provider project
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `IDENTITY_URL` - Identity Toolkit base URL (default: production endpoint)
//! - `SHARE_HOST` - Host share links point at (default: `www.vastdime.com`)
//! - `HTTP_TIMEOUT_SECONDS` - Upstream request timeout (default: 10, range 1-300)
//! - `REGISTRATION_FORM_CAPACITY` - Open registration forms kept in memory
//!   (default: 10000, min: 10)
//! - `SECURE_COOKIES` - Mark the session cookie `Secure` (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::domain::entities::DEFAULT_SHARE_HOST;
use crate::infrastructure::identity::DEFAULT_IDENTITY_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub api_url: String,
    pub identity_url: String,
    /// Sent as `?key=` on every identity provider call. Never logged.
    pub identity_api_key: String,
    pub share_host: String,
    pub http_timeout_seconds: u64,
    pub registration_form_capacity: usize,
    pub secure_cookies: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_URL` or `IDENTITY_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("API_URL").context("API_URL must be set")?;
        let identity_api_key =
            env::var("IDENTITY_API_KEY").context("IDENTITY_API_KEY must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let identity_url =
            env::var("IDENTITY_URL").unwrap_or_else(|_| DEFAULT_IDENTITY_URL.to_string());
        let share_host =
            env::var("SHARE_HOST").unwrap_or_else(|_| DEFAULT_SHARE_HOST.to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let registration_form_capacity = env::var("REGISTRATION_FORM_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let secure_cookies = env::var("SECURE_COOKIES")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            api_url,
            identity_url,
            identity_api_key,
            share_host,
            http_timeout_seconds,
            registration_form_capacity,
            secure_cookies,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `api_url` or `identity_url` is not an http(s) URL
    /// - `identity_api_key` or `share_host` is empty
    /// - `http_timeout_seconds` is outside 1-300
    /// - `registration_form_capacity` is below 10
    pub fn validate(&self) -> Result<()> {
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

        validate_http_url("API_URL", &self.api_url)?;
        validate_http_url("IDENTITY_URL", &self.identity_url)?;

        if self.identity_api_key.trim().is_empty() {
            anyhow::bail!("IDENTITY_API_KEY must not be empty");
        }

        if self.share_host.trim().is_empty() {
            anyhow::bail!("SHARE_HOST must not be empty");
        }

        if !(1..=300).contains(&self.http_timeout_seconds) {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        if self.registration_form_capacity < 10 {
            anyhow::bail!(
                "REGISTRATION_FORM_CAPACITY must be at least 10, got {}",
                self.registration_form_capacity
            );
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend API: {}", self.api_url);
        tracing::info!("  Identity provider: {}", self.identity_url);
        tracing::info!("  Identity API key: {}", mask_secret(&self.identity_api_key));
        tracing::info!("  Share host: {}", self.share_host);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!(
            "  Registration form capacity: {}",
            self.registration_form_capacity
        );
        tracing::info!("  Secure cookies: {}", self.secure_cookies);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).with_context(|| format!("{name} is not a valid URL"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
    }
    Ok(())
}

/// Masks a secret for logging, keeping the first four characters.
///
/// - `AIzaSyExample` → `AIza***`
/// - `abc` → `***`
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "***".to_string()
    } else {
        format!("{prefix}***")
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
