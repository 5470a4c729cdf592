use serde::{Deserialize, Serialize};

/// A coin's position in the market-data provider's ranking
///
/// Ranks are unique within one snapshot but not dense: gaps are normal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataEntry {
    /// Provider-side ticker, e.g. `BTC` or `MIOTA`
    pub symbol: String,
    pub rank: u32,
}

impl MarketDataEntry {
    pub fn new(symbol: impl Into<String>, rank: u32) -> Self {
        Self {
            symbol: symbol.into(),
            rank,
        }
    }
}
