use async_trait::async_trait;
use watchlist_core::{Category, CategorySummary, ExchangeSymbolInfo, MarketDataEntry};

use crate::FetchResult;

/// Source of the exchange's symbol metadata
#[async_trait]
pub trait ExchangeInfoSource: Send + Sync {
    /// Every symbol listed by the exchange, regardless of status
    async fn exchange_symbols(&self) -> FetchResult<Vec<ExchangeSymbolInfo>>;
}

/// Source of market-cap rankings and categories
///
/// Implementations talk to a quota-limited provider; callers are expected
/// to throttle them (see the gateway's `Throttled` wrapper).
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Ranked listing by market cap, descending, `limit` entries from `start` (1-based)
    async fn listings(&self, start: u32, limit: u32) -> FetchResult<Vec<MarketDataEntry>>;

    /// Every category known to the provider, without members
    async fn categories(&self) -> FetchResult<Vec<CategorySummary>>;

    /// One category with its member coins
    async fn category(&self, id: &str) -> FetchResult<Category>;
}
