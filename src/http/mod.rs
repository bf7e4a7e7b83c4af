//! HTTP transport module
//!
//! Builds and issues single API calls with retry, backoff, and rate limiting.
//!
//! # Features
//!
//! - **Bounded Retries**: 429 responses honor `Retry-After` up to a retry cap
//! - **Rate Limiting**: Token bucket limiter matched to the Readwise budgets
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Token Auth**: `Authorization: Token` header on every request

mod rate_limit;
mod transport;

pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{Request, Transport, TransportConfig, DEFAULT_BASE_URL};
