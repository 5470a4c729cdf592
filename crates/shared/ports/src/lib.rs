//! Watchlist Ports
//!
//! Port definitions (traits) for the watchlist generator.
//! These define the boundaries between domain logic and the outside world:
//! the exchange, the market-data provider and the calendar.

mod clock;
mod error;
mod sources;

pub use clock::Clock;
pub use error::{FetchError, FetchResult};
pub use sources::{ExchangeInfoSource, MarketDataSource};
