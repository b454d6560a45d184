//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAGNOLIA_HOST` - Bind address (default: 127.0.0.1)
//! - `MAGNOLIA_PORT` - Listen port (default: 3000)
//! - `MAGNOLIA_TAX_RATE` - Sales tax rate as a fraction (default: 0.0725,
//!   the Ohio rate the restaurant operates under)
//! - `MAGNOLIA_RESTAURANT_NAME` - Display name (default: Magnolia Soul Kitchen)
//!
//! The tax rate lives here, not in the cart engine: pricing policy is a
//! per-deployment concern and is injected wherever a cart is constructed.

use std::net::{IpAddr, SocketAddr};

use rust_decimal::Decimal;
use thiserror::Error;

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
    /// Sales tax rate as a fraction (e.g. 0.0725 for 7.25%)
    pub tax_rate: Decimal,
    /// Restaurant display name
    pub restaurant_name: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MAGNOLIA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MAGNOLIA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MAGNOLIA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MAGNOLIA_PORT".to_string(), e.to_string()))?;
        let tax_rate = parse_tax_rate(&get_env_or_default("MAGNOLIA_TAX_RATE", "0.0725"))?;
        let restaurant_name =
            get_env_or_default("MAGNOLIA_RESTAURANT_NAME", "Magnolia Soul Kitchen");

        Ok(Self {
            host,
            port,
            tax_rate,
            restaurant_name,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate a tax rate string.
///
/// The rate is a fraction of the subtotal; anything outside [0, 1) is a
/// misconfiguration, not a legal tax rate.
fn parse_tax_rate(value: &str) -> Result<Decimal, ConfigError> {
    let rate = value.parse::<Decimal>().map_err(|e| {
        ConfigError::InvalidEnvVar("MAGNOLIA_TAX_RATE".to_string(), e.to_string())
    })?;
    if rate.is_sign_negative() || rate >= Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            "MAGNOLIA_TAX_RATE".to_string(),
            format!("rate {rate} must be in [0, 1)"),
        ));
    }
    Ok(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tax_rate_accepts_fraction() {
        assert_eq!(parse_tax_rate("0.0725").unwrap(), Decimal::new(725, 4));
        assert_eq!(parse_tax_rate("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_tax_rate_rejects_out_of_range() {
        assert!(parse_tax_rate("-0.01").is_err());
        assert!(parse_tax_rate("1").is_err());
        assert!(parse_tax_rate("7.25").is_err());
    }

    #[test]
    fn test_parse_tax_rate_rejects_garbage() {
        assert!(parse_tax_rate("seven percent").is_err());
    }
}
