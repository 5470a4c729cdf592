//! Upstream API adapters
//!
//! Each adapter implements one of the source ports from `watchlist-ports`:
//!
//! - [`BinanceClient`]: `ExchangeInfoSource` over the Binance REST API
//! - [`CoinMarketCapClient`]: `MarketDataSource` over the CoinMarketCap Pro API
//! - [`Throttled`]: wraps any `MarketDataSource` so every call goes through a
//!   shared [`RateLimiter`](crate::rate_limit::RateLimiter)

pub mod binance;
pub mod coinmarketcap;
pub mod throttled;

pub use binance::BinanceClient;
pub use coinmarketcap::{CoinMarketCapClient, CoinMarketCapEnvironment};
pub use throttled::Throttled;
