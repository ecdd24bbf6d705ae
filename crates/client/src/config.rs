//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDERDESK_API_URL` - Base URL of the system of record (http/https)
//!
//! The bearer token is NOT part of the configuration; it belongs to the
//! injected [`AuthSession`](crate::AuthSession) and is read separately.

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Gateway connection configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the remote catalog/order service.
    pub api_url: Url,
}

impl GatewayConfig {
    const API_URL: &'static str = "ORDERDESK_API_URL";

    /// Load the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when `ORDERDESK_API_URL` is missing, unparseable, or
    /// not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = get(Self::API_URL).ok_or(ConfigError::MissingEnvVar(Self::API_URL))?;
        let api_url = Url::parse(raw.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(Self::API_URL, e.to_string()))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                Self::API_URL,
                format!("unsupported scheme: {}", api_url.scheme()),
            ));
        }
        Ok(Self { api_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(ToString::to_string)
    }

    #[test]
    fn test_loads_valid_url() {
        let config = GatewayConfig::from_lookup(lookup(&[(
            "ORDERDESK_API_URL",
            "https://counter.example.net",
        )]))
        .expect("config");
        assert_eq!(config.api_url.as_str(), "https://counter.example.net/");
    }

    #[test]
    fn test_missing_url_reported_by_name() {
        let err = GatewayConfig::from_lookup(lookup(&[])).expect_err("must fail");
        assert_eq!(
            err.to_string(),
            "Missing environment variable: ORDERDESK_API_URL"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = GatewayConfig::from_lookup(lookup(&[(
            "ORDERDESK_API_URL",
            "ftp://counter.example.net",
        )]))
        .expect_err("must fail");
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_rejects_garbage_url() {
        let err = GatewayConfig::from_lookup(lookup(&[("ORDERDESK_API_URL", "not a url")]))
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }
}
