//! Client-side rate limiting
//!
//! Uses the governor crate for token bucket rate limiting. Readwise enforces
//! per-minute request budgets server-side (240/min on the v2 API, 20/min on
//! Reader v3 writes); throttling locally keeps most calls from ever seeing a
//! 429.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Configuration for rate limiting
#[derive(Debug, Clone)]
pub struct RateLimiterConfig {
    /// Maximum number of requests per minute
    pub requests_per_minute: u32,
    /// Burst size (max tokens in bucket)
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self::readwise_v2()
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(requests_per_minute: u32, burst_size: u32) -> Self {
        Self {
            requests_per_minute,
            burst_size,
        }
    }

    /// Budget published for the v2 highlights/books API (240 req/min)
    pub fn readwise_v2() -> Self {
        Self {
            requests_per_minute: 240,
            burst_size: 20,
        }
    }

    /// Budget published for Reader v3 saves (20 req/min)
    pub fn reader_v3() -> Self {
        Self {
            requests_per_minute: 20,
            burst_size: 5,
        }
    }
}

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: &RateLimiterConfig) -> Self {
        let one = NonZeroU32::new(1).unwrap();
        let quota = Quota::per_minute(
            NonZeroU32::new(config.requests_per_minute).unwrap_or(one),
        )
        .allow_burst(NonZeroU32::new(config.burst_size).unwrap_or(one));

        Self {
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// Wait until a request can be made
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Try to acquire a permit, returning immediately
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish()
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;

    #[test]
    fn test_rate_limiter_config_default() {
        let config = RateLimiterConfig::default();
        assert_eq!(config.requests_per_minute, 240);
        assert_eq!(config.burst_size, 20);
    }

    #[test]
    fn test_rate_limiter_config_presets() {
        let v2 = RateLimiterConfig::readwise_v2();
        assert_eq!(v2.requests_per_minute, 240);

        let v3 = RateLimiterConfig::reader_v3();
        assert_eq!(v3.requests_per_minute, 20);
        assert_eq!(v3.burst_size, 5);
    }

    #[test]
    fn test_rate_limiter_allows_burst() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(60, 5));

        // Should allow burst of 5 requests immediately
        for _ in 0..5 {
            assert!(limiter.try_acquire());
        }
    }

    #[test]
    fn test_rate_limiter_wait_within_burst() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(600, 10));

        // Completes without blocking while inside the burst window
        tokio_test::block_on(limiter.wait());
    }
}
