//! The REST gateway client.
//!
//! All endpoints share the same plumbing: bearer-auth JSON requests against
//! the configured base URL, a uniform status check (401/403 become
//! [`GatewayError::Unauthorized`], every other non-success becomes
//! [`GatewayError::Api`]), and no retries. Operation groups live in
//! [`products`], [`orders`], and [`customers`].

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::GatewayConfig;
use crate::session::AuthSession;
use crate::{GatewayError, Stale};

pub mod customers;
pub mod orders;
pub mod products;
mod types;

/// Client for the remote catalog/order service.
///
/// Cheap to clone; all clones share one HTTP connection pool and one
/// session.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    inner: Arc<GatewayClientInner>,
}

#[derive(Debug)]
struct GatewayClientInner {
    http: reqwest::Client,
    base_url: String,
    session: AuthSession,
}

impl GatewayClient {
    /// Create a client for the given gateway with an injected session.
    #[must_use]
    pub fn new(config: &GatewayConfig, session: AuthSession) -> Self {
        Self {
            inner: Arc::new(GatewayClientInner {
                http: reqwest::Client::new(),
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
                session,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), GatewayError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GatewayError::Unauthorized { status });
        }
        if !status.is_success() {
            return Err(GatewayError::Api { status });
        }
        Ok(())
    }

    /// GET a JSON document.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let mut request = self
            .inner
            .http
            .get(self.endpoint(path))
            .bearer_auth(self.inner.session.expose_token());
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::check_status(&response)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a JSON body and return a JSON document.
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self
            .inner
            .http
            .request(method, self.endpoint(path))
            .bearer_auth(self.inner.session.expose_token())
            .json(body)
            .send()
            .await?;
        Self::check_status(&response)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a JSON body, discard the response body.
    pub(crate) async fn submit_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Stale, GatewayError> {
        let response = self
            .inner
            .http
            .request(method, self.endpoint(path))
            .bearer_auth(self.inner.session.expose_token())
            .json(body)
            .send()
            .await?;
        Self::check_status(&response)?;
        Ok(Stale)
    }

    /// DELETE without a body.
    pub(crate) async fn delete(&self, path: &str) -> Result<Stale, GatewayError> {
        let response = self
            .inner
            .http
            .delete(self.endpoint(path))
            .bearer_auth(self.inner.session.expose_token())
            .send()
            .await?;
        Self::check_status(&response)?;
        Ok(Stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn client(base: &str) -> GatewayClient {
        let config = GatewayConfig {
            api_url: Url::parse(base).expect("url"),
        };
        GatewayClient::new(&config, AuthSession::new("t".into()))
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client("https://counter.example.net/");
        assert_eq!(
            client.endpoint("/category/all"),
            "https://counter.example.net/category/all"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("https://counter.example.net/api/v1");
        assert_eq!(
            client.endpoint("/orders"),
            "https://counter.example.net/api/v1/orders"
        );
    }
}
