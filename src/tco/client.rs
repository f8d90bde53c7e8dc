//! TCO Certified HTTP client for API interactions

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::api;
use crate::error::{GtinError, Result};

/// Bearer token issued by the token endpoint
///
/// Owned by the caller for one run; there is no refresh or expiry handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// TCO Certified API client
pub struct TcoClient {
    client: Client,
    base_url: String,
}

impl TcoClient {
    /// Create a new client for the given base URL
    ///
    /// No request timeout is applied unless `timeout` is given, so a hung
    /// call blocks the run.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path relative to the base URL
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Create an unauthenticated POST request builder
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.post(url)
    }

    /// Create a POST request builder carrying the bearer token
    pub(crate) fn post_authorized(&self, url: &str, token: &Token) -> reqwest::RequestBuilder {
        debug!("POST {}", url);
        self.client
            .post(url)
            .header(api::AUTH_HEADER, format!("Bearer {}", token.as_str()))
            .header("Content-Type", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("Failed to fetch {}", error_context)
            } else {
                format!("Failed to fetch {}: {}", error_context, body.trim())
            };
            return Err(GtinError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
impl TcoClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, None)
    }
}
