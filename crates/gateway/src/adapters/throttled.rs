use std::sync::Arc;

use async_trait::async_trait;
use watchlist_core::{Category, CategorySummary, MarketDataEntry};
use watchlist_ports::{FetchResult, MarketDataSource};

use crate::rate_limit::RateLimiter;

/// Routes every call of a market-data source through a rate limiter
///
/// Clones of the `Arc<RateLimiter>` share one quota, so several wrappers
/// can sit in front of the same provider.
pub struct Throttled<M> {
    inner: M,
    limiter: Arc<RateLimiter>,
}

impl<M> Throttled<M> {
    pub fn new(inner: M, limiter: Arc<RateLimiter>) -> Self {
        Throttled { inner, limiter }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }
}

#[async_trait]
impl<M: MarketDataSource> MarketDataSource for Throttled<M> {
    async fn listings(&self, start: u32, limit: u32) -> FetchResult<Vec<MarketDataEntry>> {
        self.limiter
            .schedule(|| self.inner.listings(start, limit))
            .await
    }

    async fn categories(&self) -> FetchResult<Vec<CategorySummary>> {
        self.limiter.schedule(|| self.inner.categories()).await
    }

    async fn category(&self, id: &str) -> FetchResult<Category> {
        self.limiter.schedule(|| self.inner.category(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limit::RateLimitConfig;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::Instant;
    use watchlist_ports::FetchError;

    /// Records when each call reached the provider
    struct RecordingSource {
        origin: Instant,
        calls: Mutex<Vec<(String, Duration)>>,
    }

    impl RecordingSource {
        fn new() -> Self {
            RecordingSource {
                origin: Instant::now(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: &str) {
            self.calls
                .lock()
                .unwrap()
                .push((call.to_string(), self.origin.elapsed()));
        }
    }

    #[async_trait]
    impl MarketDataSource for RecordingSource {
        async fn listings(&self, _start: u32, _limit: u32) -> FetchResult<Vec<MarketDataEntry>> {
            self.record("listings");
            Ok(vec![MarketDataEntry::new("BTC", 1)])
        }

        async fn categories(&self) -> FetchResult<Vec<CategorySummary>> {
            self.record("categories");
            Ok(vec![CategorySummary::new("c1", "DeFi")])
        }

        async fn category(&self, id: &str) -> FetchResult<Category> {
            self.record(id);
            if id == "broken" {
                return Err(FetchError::UnexpectedStatus {
                    endpoint: "/v1/cryptocurrency/category".to_string(),
                    status: 500,
                });
            }
            Ok(Category {
                id: id.to_string(),
                name: id.to_string(),
                description: String::new(),
                coins: Vec::new(),
            })
        }
    }

    fn throttled() -> Throttled<RecordingSource> {
        let limiter = RateLimiter::new(RateLimitConfig::new(Duration::from_millis(2500), 1));
        Throttled::new(RecordingSource::new(), Arc::new(limiter))
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_are_spaced_in_submission_order() {
        let source = throttled();

        let (listings, categories, category) = tokio::join!(
            source.listings(1, 1500),
            source.categories(),
            source.category("c1"),
        );
        assert!(listings.is_ok() && categories.is_ok() && category.is_ok());

        let calls = source.inner().calls.lock().unwrap();
        let names: Vec<&str> = calls.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["listings", "categories", "c1"]);
        assert!(calls[1].1 >= calls[0].1 + Duration::from_millis(2500));
        assert!(calls[2].1 >= calls[1].1 + Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_passes_through_untouched() {
        let source = throttled();

        let result = source.category("broken").await;

        assert_eq!(
            result.unwrap_err(),
            FetchError::UnexpectedStatus {
                endpoint: "/v1/cryptocurrency/category".to_string(),
                status: 500,
            }
        );
        // No retry
        assert_eq!(source.inner().calls.lock().unwrap().len(), 1);
    }
}
