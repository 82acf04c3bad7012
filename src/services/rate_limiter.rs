use std::num::NonZeroU32;
use std::sync::Arc;
use governor::{Quota, RateLimiter, Jitter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use nonzero_ext::nonzero;
use crate::config::constants::{sleep_duration_millis, RATE_LIMIT_JITTER_MS};
use crate::structs::config::rate_limit_config::RateLimitConfig;

/// Shared by every provider call: a per-minute quota plus a per-second burst cap.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    burst_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let per_minute = NonZeroU32::new(config.requests_per_minute).unwrap_or(nonzero!(1u32));
        let per_second = NonZeroU32::new(config.burst_per_second).unwrap_or(nonzero!(1u32));

        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))),
            burst_limiter: Arc::new(RateLimiter::direct(Quota::per_second(per_second))),
        }
    }

    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter
            .until_ready_with_jitter(Jitter::up_to(sleep_duration_millis(RATE_LIMIT_JITTER_MS)))
            .await;
    }

    /// Takes a cell from the per-minute quota when one is free, without waiting.
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for ApiRateLimiter {
    fn default() -> Self {
        Self::new(&RateLimitConfig::default())
    }
}
