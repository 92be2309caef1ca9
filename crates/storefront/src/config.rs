//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUPABASE_URL` - Base URL of the hosted backend project
//! - `SUPABASE_ANON_KEY` - Public (anon) API key for catalog reads
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `STOREFRONT_DATA_DIR` - Directory for locally persisted state
//!   (default: data)
//! - `WHATSAPP_NUMBER` - Checkout destination, digits only including
//!   country code (default: the shop's number)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// The shop's WhatsApp number, used when the variable is not set.
const DEFAULT_WHATSAPP_NUMBER: &str = "5493415850155";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Hosted backend (catalog reads)
    pub backend: BackendConfig,
    /// WhatsApp number for the checkout handoff (digits only)
    pub whatsapp_number: String,
    /// Directory for the locally persisted cart and theme
    pub data_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Hosted backend configuration for catalog reads.
///
/// The anon key is shipped to browsers by the hosted service's own design,
/// so it is not treated as a secret here. The privileged service-role key
/// lives only in the admin binary's configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL (e.g. <https://xyzcompany.supabase.co>)
    pub url: String,
    /// Public (anon) API key
    pub api_key: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");

        let whatsapp_number = get_env_or_default("WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER);
        validate_whatsapp_number(&whatsapp_number)?;

        let data_dir = PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", "data"));

        Ok(Self {
            host,
            port,
            base_url,
            backend: BackendConfig::from_env()?,
            whatsapp_number,
            data_dir,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = get_required_env("SUPABASE_URL")?
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            url,
            api_key: get_required_env("SUPABASE_ANON_KEY")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
pub(crate) fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
pub(crate) fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
pub(crate) fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a WhatsApp number is digits only (country code included,
/// no `+`), the form `wa.me` links require.
fn validate_whatsapp_number(number: &str) -> Result<(), ConfigError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "WHATSAPP_NUMBER".to_string(),
            format!("must be digits only, got {number:?}"),
        ));
    }
    Ok(())
}
