//! The operator's authenticated session.
//!
//! The bearer token is passed to the gateway explicitly instead of living in
//! ambient storage, so there is exactly one place it can come from and tests
//! can inject their own.

use secrecy::{ExposeSecret, SecretString};

use crate::config::ConfigError;

/// An authenticated back-office session.
///
/// Wraps the bearer token issued by the login entry point. How the token is
/// obtained is out of scope here; the session only carries it to the
/// gateway.
#[derive(Clone)]
pub struct AuthSession {
    token: SecretString,
}

impl AuthSession {
    const API_TOKEN: &'static str = "ORDERDESK_API_TOKEN";

    /// Create a session from an already obtained token.
    #[must_use]
    pub const fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Read the token from `ORDERDESK_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is missing or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token =
            std::env::var(Self::API_TOKEN).map_err(|_| ConfigError::MissingEnvVar(Self::API_TOKEN))?;
        if token.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(Self::API_TOKEN, "blank token".to_string()));
        }
        Ok(Self::new(token.into()))
    }

    /// The raw token, for the `Authorization: Bearer` header.
    pub(crate) fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Redacts the token.
impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let session = AuthSession::new("very-secret-token".into());
        let debug = format!("{session:?}");
        assert!(!debug.contains("very-secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_token_exposed_only_on_request_path() {
        let session = AuthSession::new("tok".into());
        assert_eq!(session.expose_token(), "tok");
    }
}
