//! Watchlist Core Domain
//!
//! Pure domain logic of the watchlist generator: exchange and market-data
//! entities, the symbol alias table, reconciliation of the two datasets and
//! the watchlist text format.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod aliases;
pub mod entities;
pub mod naming;
pub mod reconcile;
pub mod watchlist;

// Re-export commonly used types at crate root
pub use aliases::{SymbolAlias, SymbolAliases};
pub use entities::{
    Category, CategorySummary, ExchangeSymbolInfo, MarketDataEntry, SPOT_PERMISSION,
    SymbolStatus, TradingPair,
};
pub use reconcile::{RankIndex, Reconciliation, SymbolReconciler};
pub use watchlist::{
    RankBucket, RankedWatchlist, SECTION_PREFIX, Watchlist, WatchlistBuilder, WatchlistFormat,
};
