//! Fetch orchestration
//!
//! Fans out the upstream requests of a run and joins them. The exchange is
//! queried directly; every market-data request goes through the shared
//! rate limiter. The first failure aborts the whole fetch.

use std::sync::Arc;

use futures_util::future::try_join_all;
use watchlist_core::{Category, CategorySummary, ExchangeSymbolInfo, MarketDataEntry};
use watchlist_gateway::{RateLimiter, Throttled};
use watchlist_ports::{ExchangeInfoSource, FetchResult, MarketDataSource};

/// Everything the ranked watchlist (and the category list) needs
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub symbols: Vec<ExchangeSymbolInfo>,
    pub listings: Vec<MarketDataEntry>,
    /// Empty when category watchlists are disabled
    pub categories: Vec<CategorySummary>,
}

pub struct FetchOrchestrator<E, M> {
    exchange: E,
    market: Throttled<M>,
    max_rank: u32,
    with_categories: bool,
}

impl<E, M> FetchOrchestrator<E, M>
where
    E: ExchangeInfoSource,
    M: MarketDataSource,
{
    /// `market` is wrapped so that all of its calls share `limiter`
    pub fn new(
        exchange: E,
        market: M,
        limiter: Arc<RateLimiter>,
        max_rank: u32,
        with_categories: bool,
    ) -> Self {
        Self {
            exchange,
            market: Throttled::new(market, limiter),
            max_rank,
            with_categories,
        }
    }

    /// Exchange info, the ranked listing and (optionally) the category list, concurrently
    pub async fn fetch_snapshot(&self) -> FetchResult<MarketSnapshot> {
        let symbols = self.exchange.exchange_symbols();
        let listings = self.market.listings(1, self.max_rank);

        let snapshot = if self.with_categories {
            let (symbols, listings, categories) =
                tokio::try_join!(symbols, listings, self.market.categories())?;
            MarketSnapshot {
                symbols,
                listings,
                categories,
            }
        } else {
            let (symbols, listings) = tokio::try_join!(symbols, listings)?;
            MarketSnapshot {
                symbols,
                listings,
                categories: Vec::new(),
            }
        };

        log::info!(
            "Fetched {} exchange symbols, {} ranked coins, {} categories",
            snapshot.symbols.len(),
            snapshot.listings.len(),
            snapshot.categories.len()
        );
        Ok(snapshot)
    }

    /// Member coins of every category, one throttled request each
    pub async fn fetch_categories(
        &self,
        summaries: &[CategorySummary],
    ) -> FetchResult<Vec<Category>> {
        let interval = self.market.limiter().config().min_interval;
        log::info!(
            "Fetching {} categories, about {:?} at one request per {:?}",
            summaries.len(),
            interval * summaries.len() as u32,
            interval
        );

        try_join_all(summaries.iter().map(|c| self.market.category(&c.id))).await
    }
}
