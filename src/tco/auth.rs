//! Token exchange

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{GtinError, Result};
use crate::tco::{Credentials, TcoClient, Token};

/// Request body for the token endpoint
#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response from the token endpoint
#[derive(Deserialize, Debug)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

impl TcoClient {
    /// Exchange credentials for a bearer token
    ///
    /// Issues exactly one request; any failure is an authentication error
    /// and is not retried.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Token> {
        let url = self.endpoint(api::TOKEN);
        debug!(
            "Requesting token for user '{}' from: {}",
            credentials.username(),
            url
        );

        let body = TokenRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response = self
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GtinError::authentication(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GtinError::Authentication(format!(
                "token request returned status {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GtinError::authentication(e.into()))?;
        let token_response: TokenResponse = serde_json::from_slice(&bytes)
            .map_err(|e| GtinError::authentication(e.into()))?;

        match token_response.token {
            Some(token) if !token.is_empty() => {
                info!("Token received");
                Ok(Token::new(token))
            }
            _ => Err(GtinError::Authentication(
                "authentication succeeded, but no token was returned".to_string(),
            )),
        }
    }
}
