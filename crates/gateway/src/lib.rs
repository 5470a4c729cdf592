//! Watchlist Gateway
//!
//! Gateway layer of the watchlist generator. Provides:
//! - REST adapters for the exchange (Binance) and the market-data provider
//!   (CoinMarketCap), implementing the source ports
//! - Wire message types for both APIs
//! - A FIFO rate limiter and a throttling wrapper for quota-limited sources
//!
//! ## Architecture
//!
//! ```text
//! External World (Binance, CoinMarketCap)
//!         │                    │
//!   ┌─────▼──────┐     ┌───────▼────────┐
//!   │ Binance    │     │ CoinMarketCap  │
//!   │ Client     │     │ Client         │
//!   └─────┬──────┘     └───────┬────────┘
//!         │              ┌─────▼─────┐
//!         │              │ Throttled │ ← RateLimiter (1 call / 2.5s)
//!         │              └─────┬─────┘
//!         │ ExchangeInfoSource │ MarketDataSource
//!    ┌────▼────────────────────▼────┐
//!    │         Runner pipelines     │
//!    └──────────────────────────────┘
//! ```

pub mod adapters;
pub mod error;
pub mod messages;
pub mod rate_limit;
pub mod rest;

// Re-export commonly used types
pub use adapters::{BinanceClient, CoinMarketCapClient, CoinMarketCapEnvironment, Throttled};
pub use error::RestError;
pub use rate_limit::{RateLimitConfig, RateLimiter};
pub use rest::RestClient;
