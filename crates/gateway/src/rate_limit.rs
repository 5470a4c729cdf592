//! Request throttling for quota-limited APIs
//!
//! The CoinMarketCap free plan allows 30 calls a minute. Every call to the
//! provider goes through one [`RateLimiter`], which starts tasks in
//! submission order, no closer together than `min_interval`, and never runs
//! more than `max_concurrent` of them at once.

use std::future::Future;
use std::time::Duration;

use tokio::sync::{Mutex, Semaphore};
use tokio::time::Instant;

/// Configuration for request throttling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Minimum time between the starts of two consecutive tasks
    pub min_interval: Duration,
    /// Maximum number of tasks executing at the same time
    pub max_concurrent: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // CoinMarketCap free plan: 30 requests a minute
        RateLimitConfig {
            min_interval: Duration::from_millis(2500),
            max_concurrent: 1,
        }
    }
}

impl RateLimitConfig {
    pub fn new(min_interval: Duration, max_concurrent: usize) -> Self {
        RateLimitConfig {
            min_interval,
            max_concurrent,
        }
    }
}

/// FIFO scheduler that spaces out task starts
///
/// `schedule` never retries and never drops a task: whatever the task
/// returns, including an error, is handed back to the caller.
pub struct RateLimiter {
    config: RateLimitConfig,
    /// Start time of the most recent task. The lock is fair, so waiters
    /// are released in the order they called `schedule`.
    last_start: Mutex<Option<Instant>>,
    /// In-flight slots
    slots: Semaphore,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        RateLimiter {
            config,
            last_start: Mutex::new(None),
            slots: Semaphore::new(config.max_concurrent.max(1)),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Run `task` once its turn comes and return its output
    pub async fn schedule<F, Fut, T>(&self, task: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _permit = {
            let mut last_start = self.last_start.lock().await;

            // Holding the start lock while waiting for a slot keeps FIFO order
            let permit = self
                .slots
                .acquire()
                .await
                .expect("rate limiter semaphore is never closed");

            if let Some(previous) = *last_start {
                let ready_at = previous + self.config.min_interval;
                let now = Instant::now();
                if ready_at > now {
                    log::debug!("Rate limiter: waiting {:?}", ready_at - now);
                    tokio::time::sleep_until(ready_at).await;
                }
            }
            *last_start = Some(Instant::now());

            permit
        };

        task().await
    }
}
