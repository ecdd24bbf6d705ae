//! Orderdesk gateway client.
//!
//! REST client for the remote catalog/order service - the system of record
//! every back-office view reads from and submits to.
//!
//! # Architecture
//!
//! - One [`GatewayClient`] per session, cheap to clone
//! - The bearer token lives in an explicitly injected [`AuthSession`], never
//!   in ambient global state
//! - Every mutation returns a [`Stale`] marker: the client never guesses the
//!   post-submission server state, callers re-fetch instead
//! - No retry, backoff, timeout, or cancellation: a failed call simply
//!   surfaces its error and the operator retries that one section
//!
//! # Example
//!
//! ```rust,ignore
//! use orderdesk_client::{AuthSession, GatewayClient, GatewayConfig};
//!
//! let config = GatewayConfig::from_env()?;
//! let session = AuthSession::from_env()?;
//! let client = GatewayClient::new(&config, session);
//!
//! let products = client.fetch_products().await?;
//!
//! // Mutations invalidate the cached entity; re-fetch before rendering.
//! let _stale = client
//!     .update_product_quantities(category_id, product_id, &counters)
//!     .await?;
//! let products = client.fetch_products().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
mod gateway;
mod session;

pub use config::{ConfigError, GatewayConfig};
pub use gateway::GatewayClient;
pub use gateway::customers::CustomerProfile;
pub use gateway::orders::NewOrder;
pub use gateway::products::{
    DimensionsUpdate, MainInfoUpdate, NewCategory, NewProduct, PriceUpdate,
};
pub use session::AuthSession;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the system of record.
///
/// Authentication failure is the only programmatically distinguished class;
/// everything else is a single "operation failed" condition the operator
/// recovers from by retrying that section.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The transport layer failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The token was rejected (401 or 403); callers route the operator back
    /// to the login entry point.
    #[error("Unauthorized ({status}): sign in again")]
    Unauthorized { status: StatusCode },

    /// Any other non-success response.
    #[error("Operation failed with status {status}")]
    Api { status: StatusCode },
}

impl GatewayError {
    /// Whether this failure means the session is no longer valid.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Marker returned by every successful mutation.
///
/// The server-side entity changed and any cached copy is now stale; the
/// caller must re-fetch before rendering. The client never merges a
/// submission result into local state.
#[must_use = "the cached entity is stale; re-fetch it before rendering"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stale;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_error_display() {
        let err = GatewayError::Unauthorized {
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(err.to_string(), "Unauthorized (403 Forbidden): sign in again");
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_api_error_display() {
        let err = GatewayError::Api {
            status: StatusCode::BAD_REQUEST,
        };
        assert_eq!(err.to_string(), "Operation failed with status 400 Bad Request");
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_only_401_and_403_are_auth_failures() {
        for code in [401u16, 403] {
            let status = StatusCode::from_u16(code).expect("valid status");
            assert!(GatewayError::Unauthorized { status }.is_auth_failure());
        }
        let err = GatewayError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(!err.is_auth_failure());
    }
}
