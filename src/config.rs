//! Client configuration
//!
//! `ClientOptions` collects everything needed to build a client: the access
//! token (explicit or from the environment), the transport tuning, and the
//! pagination safety cap.

use crate::auth::TokenAuth;
use crate::error::Result;
use crate::http::TransportConfig;
use url::Url;

/// Safety cap on pages fetched per collection call
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Options for constructing a client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Explicit access token; falls back to `READWISE_TOKEN` when None
    pub token: Option<String>,
    /// Transport configuration (base URL, timeouts, retries, rate limit)
    pub transport: TransportConfig,
    /// Maximum pages fetched per collection call
    pub max_pages: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            token: None,
            transport: TransportConfig::default(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ClientOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit access token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the API base URL (e.g. for a mock server)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.transport.base_url = url.into();
        self
    }

    /// Replace the transport configuration wholesale
    #[must_use]
    pub fn transport(mut self, config: TransportConfig) -> Self {
        self.transport = config;
        self
    }

    /// Set the per-collection page cap
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Validate the options and resolve the token
    pub(crate) fn resolve(self) -> Result<(TokenAuth, TransportConfig, u32)> {
        Url::parse(&self.transport.base_url)?;
        let auth = TokenAuth::resolve(self.token)?;
        Ok((auth, self.transport, self.max_pages))
    }
}
