//! Watchlist Runner
//!
//! Generates TradingView watchlists of exchange pairs ordered by market cap:
//!
//! - **Config**: immutable run configuration from defaults, file, env and flags
//! - **Fetch**: concurrent, rate-limited retrieval of the upstream data
//! - **Pipelines**: reconciliation and watchlist building, general and per category
//! - **Output**: the per-run output directory
//!
//! ## Architecture
//!
//! ```text
//!   Binance ──────────────┐
//!                         ▼
//!   CoinMarketCap ──► FetchOrchestrator
//!   (throttled)           │ snapshot
//!              ┌──────────┴───────────┐
//!              ▼                      ▼
//!       RankedPipeline         CategoryPipeline
//!              │                      │ per category
//!              ▼                      ▼
//!   binance_watchlist_*.txt   categorized/*.txt
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;

// Re-export main types
pub use app::{RunReport, WatchlistRun};
pub use config::{ConfigError, RateLimitSettings, WatchlistConfig};
pub use error::{Result, RunError};
pub use fetch::{FetchOrchestrator, MarketSnapshot};
pub use output::OutputDir;
pub use pipeline::{CategoryPipeline, CategoryReport, RankedPipeline, RankedReport};
