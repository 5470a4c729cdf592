//! A complete watchlist run
//!
//! Wires the sources, the clock and the pipelines together:
//!
//! 1. reset the output directory
//! 2. fetch exchange info, the listing and the category list
//! 3. write the general watchlist
//! 4. fetch every category and write one watchlist each
//!
//! Any fetch failure ends the run. Because the general watchlist is only
//! written after the snapshot is complete, a failed snapshot leaves the
//! output directory empty.

use std::path::PathBuf;
use std::sync::Arc;

use watchlist_clock::SystemClock;
use watchlist_core::{SymbolReconciler, WatchlistBuilder};
use watchlist_gateway::{BinanceClient, CoinMarketCapClient, RateLimiter};
use watchlist_ports::{Clock, ExchangeInfoSource, MarketDataSource};

use crate::config::WatchlistConfig;
use crate::error::Result;
use crate::fetch::FetchOrchestrator;
use crate::output::OutputDir;
use crate::pipeline::{CategoryPipeline, CategoryReport, RankedPipeline, RankedReport};

/// Summary of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub ranked: RankedReport,
    /// `None` when category watchlists are disabled
    pub categories: Option<CategoryReport>,
}

impl RunReport {
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files = self.ranked.files.clone();
        if let Some(categories) = &self.categories {
            files.extend(categories.files.iter().cloned());
        }
        files
    }
}

pub struct WatchlistRun<E, M, C> {
    config: WatchlistConfig,
    fetcher: FetchOrchestrator<E, M>,
    clock: C,
    reconciler: SymbolReconciler,
    builder: WatchlistBuilder,
    output: OutputDir,
}

impl WatchlistRun<BinanceClient, CoinMarketCapClient, SystemClock> {
    /// Production wiring; fails without an API key
    pub fn from_config(config: WatchlistConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.api_key()?.to_string();

        let exchange = BinanceClient::new(config.binance_base_url.clone());
        let market = CoinMarketCapClient::new(config.coinmarketcap_base_url.clone(), api_key);

        Ok(Self::new(config, exchange, market, SystemClock::new()))
    }
}

impl<E, M, C> WatchlistRun<E, M, C>
where
    E: ExchangeInfoSource,
    M: MarketDataSource,
    C: Clock,
{
    pub fn new(config: WatchlistConfig, exchange: E, market: M, clock: C) -> Self {
        let limiter = Arc::new(RateLimiter::new(config.rate_limit_config()));
        let fetcher = FetchOrchestrator::new(
            exchange,
            market,
            limiter,
            config.max_rank,
            config.categories,
        );

        Self {
            reconciler: config.reconciler(),
            builder: config.builder(),
            output: OutputDir::new(config.output_dir.clone()),
            fetcher,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &WatchlistConfig {
        &self.config
    }

    pub async fn run(&self) -> Result<RunReport> {
        let date = self.clock.today();
        log::info!(
            "Generating {} watchlists for {} into {} ({})",
            self.config.quote_asset,
            date,
            self.output.root().display(),
            self.clock.name()
        );

        self.output.reset()?;

        let snapshot = self.fetcher.fetch_snapshot().await?;

        let ranked = RankedPipeline::new(
            &self.reconciler,
            &self.builder,
            self.config.section_headers,
        )
        .run(&snapshot.symbols, &snapshot.listings, &self.output, date)?;

        let categories = if self.config.categories {
            let details = self.fetcher.fetch_categories(&snapshot.categories).await?;
            let report = CategoryPipeline::new(&self.reconciler, &self.builder).run(
                &snapshot.symbols,
                &details,
                &self.output,
                date,
            )?;
            Some(report)
        } else {
            None
        };

        Ok(RunReport { ranked, categories })
    }
}
