//! Token-bucket rate limiting for outbound requests.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

use crate::core::SleeperError;

/// A token bucket refilled at `rate` permits per second, holding at most `burst`.
///
/// Cloning shares the bucket, so every clone of a client draws from the same budget.
#[derive(Clone)]
pub(crate) struct RequestLimiter {
    inner: Arc<DefaultDirectRateLimiter>,
    rate: f64,
    burst: u32,
}

impl RequestLimiter {
    pub(crate) fn new(rate: f64, burst: u32) -> Result<Self, SleeperError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SleeperError::InvalidConfig(format!(
                "rate limit must be a positive number of requests per second, got {rate}"
            )));
        }
        let burst_nz = NonZeroU32::new(burst).ok_or_else(|| {
            SleeperError::InvalidConfig("rate limit burst must be at least 1".into())
        })?;
        let period = Duration::try_from_secs_f64(1.0 / rate).map_err(|_| {
            SleeperError::InvalidConfig(format!("rate limit {rate}/s is too low"))
        })?;
        let quota = Quota::with_period(period)
            .ok_or_else(|| {
                SleeperError::InvalidConfig(format!("rate limit {rate}/s is too high"))
            })?
            .allow_burst(burst_nz);

        Ok(Self {
            inner: Arc::new(RateLimiter::direct(quota)),
            rate,
            burst,
        })
    }

    /// Waits until one permit is available and consumes it.
    ///
    /// Dropping the returned future abandons the wait without consuming a permit.
    pub(crate) async fn acquire(&self) {
        self.inner.until_ready().await;
    }

    pub(crate) fn rate(&self) -> f64 {
        self.rate
    }

    pub(crate) fn burst(&self) -> u32 {
        self.burst
    }
}

impl std::fmt::Debug for RequestLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestLimiter")
            .field("rate", &self.rate)
            .field("burst", &self.burst)
            .finish_non_exhaustive()
    }
}
