//! Client-side quota pacing
//!
//! Google Cloud APIs meter requests per minute per project. Pacing
//! requests locally with a token bucket (the governor crate) keeps a
//! busy caller under its quota instead of burning retries on 429s.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Client-side quota configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaConfig {
    /// Maximum number of requests per minute
    pub requests_per_minute: u32,
    /// Burst size (max tokens in bucket)
    pub burst: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        // Well under the default per-project quota for this API.
        Self {
            requests_per_minute: 600,
            burst: 60,
        }
    }
}

impl QuotaConfig {
    /// Create a new quota config
    pub fn new(requests_per_minute: u32, burst: u32) -> Self {
        Self {
            requests_per_minute,
            burst,
        }
    }
}

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given quota
    pub fn new(config: &QuotaConfig) -> Self {
        let one = NonZeroU32::new(1).unwrap();
        let quota = Quota::per_minute(NonZeroU32::new(config.requests_per_minute).unwrap_or(one))
            .allow_burst(NonZeroU32::new(config.burst).unwrap_or(one));

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

    /// Wait with a timeout
    pub async fn wait_with_timeout(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.limiter.until_ready())
            .await
            .is_ok()
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
    fn test_quota_config_default() {
        let config = QuotaConfig::default();
        assert_eq!(config.requests_per_minute, 600);
        assert_eq!(config.burst, 60);
    }

    #[test]
    fn test_quota_config_new() {
        let config = QuotaConfig::new(120, 10);
        assert_eq!(config.requests_per_minute, 120);
        assert_eq!(config.burst, 10);
    }

    #[tokio::test]
    async fn test_rate_limiter_allows_burst() {
        let limiter = RateLimiter::new(&QuotaConfig::new(60, 5));

        // Should allow burst of 5 requests immediately
        for _ in 0..5 {
            assert!(limiter.try_acquire());
        }
    }

    #[tokio::test]
    async fn test_rate_limiter_wait() {
        let limiter = RateLimiter::new(&QuotaConfig::new(6000, 10));

        // Should complete without blocking (within burst)
        limiter.wait().await;
    }

    #[tokio::test]
    async fn test_rate_limiter_wait_with_timeout() {
        let limiter = RateLimiter::new(&QuotaConfig::new(6000, 10));

        let result = limiter.wait_with_timeout(Duration::from_millis(100)).await;
        assert!(result);
    }

    #[test]
    fn test_zero_quota_clamps_to_one() {
        // NonZero construction must not panic on a zero config.
        let limiter = RateLimiter::new(&QuotaConfig::new(0, 0));
        assert!(limiter.try_acquire());
    }
}
