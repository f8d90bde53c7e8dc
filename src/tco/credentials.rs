//! API credential resolution from flags, environment and prompt

use dialoguer::{theme::ColorfulTheme, Input, Password};
use log::debug;
use std::fmt;

use crate::config::credentials;
use crate::error::{GtinError, Result};

/// Username and password for the token exchange
///
/// Held in memory only. `Debug` never prints the password and there is
/// no serialization path besides the auth request body.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    batch_mode: bool,
}

impl CredentialResolver {
    /// Create a resolver; in batch mode it never prompts
    pub fn new(batch_mode: bool) -> Self {
        Self { batch_mode }
    }

    /// Resolve credentials from multiple sources with fallback:
    /// 1. Username from CLI argument or TCO_USERNAME (clap reads the env var)
    /// 2. Password from TCO_PASSWORD
    /// 3. Interactive prompt for whatever is still missing
    pub fn resolve(&self, cli_username: Option<&str>) -> Result<Credentials> {
        let env_password = std::env::var(credentials::PASSWORD_ENV_VAR).ok();
        self.resolve_with(cli_username, env_password)
    }

    fn resolve_with(
        &self,
        username: Option<&str>,
        password: Option<String>,
    ) -> Result<Credentials> {
        if self.batch_mode && (username.is_none() || password.is_none()) {
            return Err(GtinError::Config(self.missing_credentials_message(
                username.is_none(),
                password.is_none(),
            )));
        }

        if username.is_none() || password.is_none() {
            eprintln!("Please enter your TCO Certified API credentials:");
        }

        let username = match username {
            Some(u) => {
                debug!("Using username from CLI argument or environment");
                u.to_string()
            }
            None => Self::prompt_username()?,
        };

        let password = match password {
            Some(p) => {
                debug!(
                    "Using password from {} environment variable",
                    credentials::PASSWORD_ENV_VAR
                );
                p
            }
            None => Self::prompt_password()?,
        };

        Ok(Credentials { username, password })
    }

    fn prompt_username() -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GtinError::Config(format!("Failed to read username: {}", e)))
    }

    fn prompt_password() -> Result<String> {
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| GtinError::Config(format!("Failed to read password: {}", e)))
    }

    /// Generate helpful error message when credentials are missing in batch mode
    fn missing_credentials_message(
        &self,
        missing_username: bool,
        missing_password: bool,
    ) -> String {
        let mut missing = Vec::new();
        if missing_username {
            missing.push(format!(
                "username (use --username or export {}=<USERNAME>)",
                credentials::USERNAME_ENV_VAR
            ));
        }
        if missing_password {
            missing.push(format!(
                "password (export {}=<PASSWORD>)",
                credentials::PASSWORD_ENV_VAR
            ));
        }
        format!("Missing credentials in batch mode: {}", missing.join(", "))
    }
}
