use serde::{Deserialize, Serialize};

/// An exchange symbol joined with its market-data rank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    /// The exchange's own symbol, e.g. `IOTAUSDT` (never the provider alias)
    pub symbol: String,
    pub rank: u32,
}

impl TradingPair {
    pub fn new(symbol: impl Into<String>, rank: u32) -> Self {
        Self {
            symbol: symbol.into(),
            rank,
        }
    }
}
