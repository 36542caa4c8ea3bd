//! Client-side request rate limiting.
//!
//! Cloudflare enforces a per-user request budget. Pacing requests locally
//! keeps a busy client from running into 429 responses in the first place.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

/// A shared token-bucket limiter allowing `per_second` requests per second.
///
/// Clones share the same bucket.
#[derive(Clone)]
pub struct RequestRateLimiter {
    limiter: Arc<DefaultDirectRateLimiter>,
    per_second: NonZeroU32,
}

impl RequestRateLimiter {
    /// Creates a limiter with a burst of, and refill rate of, `per_second`.
    #[must_use]
    pub fn per_second(per_second: NonZeroU32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(per_second))),
            per_second,
        }
    }

    /// Returns the configured requests-per-second budget.
    #[must_use]
    pub const fn rate(&self) -> NonZeroU32 {
        self.per_second
    }

    /// Waits until a request may be sent.
    pub async fn until_ready(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a slot if one is available right now.
    #[must_use]
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl fmt::Debug for RequestRateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestRateLimiter")
            .field("per_second", &self.per_second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_is_bounded_by_rate() {
        let limiter = RequestRateLimiter::per_second(NonZeroU32::new(2).unwrap());

        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn test_clones_share_bucket() {
        let limiter = RequestRateLimiter::per_second(NonZeroU32::new(1).unwrap());
        let clone = limiter.clone();

        assert!(limiter.try_acquire());
        assert!(!clone.try_acquire());
        assert_eq!(clone.rate().get(), 1);
    }

    #[tokio::test]
    async fn test_until_ready_returns_when_capacity_available() {
        let limiter = RequestRateLimiter::per_second(NonZeroU32::new(5).unwrap());
        limiter.until_ready().await;
        limiter.until_ready().await;
    }
}
