//! Token authentication
//!
//! Readwise uses a single static access token for both the v2 and v3 APIs,
//! sent as `Authorization: Token <token>` on every request. The token comes
//! from an explicit option or the `READWISE_TOKEN` environment variable; a
//! missing token is a configuration error, resolved before any request is
//! built.

use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// Environment variable consulted when no explicit token is given
pub const TOKEN_ENV_VAR: &str = "READWISE_TOKEN";

/// Holds the resolved Readwise access token and applies it to requests
#[derive(Clone)]
pub struct TokenAuth {
    token: String,
}

impl TokenAuth {
    /// Create an authenticator from an explicit token
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::MissingToken);
        }
        Ok(Self { token })
    }

    /// Resolve the token from an explicit option, falling back to the
    /// `READWISE_TOKEN` environment variable
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        match explicit {
            Some(token) => Self::new(token),
            None => match std::env::var(TOKEN_ENV_VAR) {
                Ok(token) if !token.is_empty() => Ok(Self { token }),
                _ => Err(Error::MissingToken),
            },
        }
    }

    /// Apply the `Authorization: Token <token>` header to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", format!("Token {}", self.token))
    }
}

impl std::fmt::Debug for TokenAuth {
    // Token value kept out of logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuth").field("token", &"***").finish()
    }
}
