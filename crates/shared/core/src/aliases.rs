//! Symbol alias table
//!
//! The exchange and the market-data provider occasionally list the same coin
//! under different tickers. The table below is configuration data: each entry
//! names the ticker on both sides, and lookups work in either direction.

use serde::{Deserialize, Serialize};

/// One known naming mismatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolAlias {
    /// Ticker used by the exchange, e.g. `IOTA`
    pub exchange: String,
    /// Ticker used by the market-data provider, e.g. `MIOTA`
    pub provider: String,
}

impl SymbolAlias {
    pub fn new(exchange: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            provider: provider.into(),
        }
    }
}

/// Bidirectional exchange ↔ provider ticker table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolAliases {
    aliases: Vec<SymbolAlias>,
}

impl Default for SymbolAliases {
    /// Mismatches known between Binance and CoinMarketCap
    fn default() -> Self {
        Self::new(vec![
            SymbolAlias::new("IOTA", "MIOTA"),
            SymbolAlias::new("GXS", "GXC"),
        ])
    }
}

impl SymbolAliases {
    pub fn new(aliases: Vec<SymbolAlias>) -> Self {
        Self { aliases }
    }

    /// A table with no aliases: every ticker maps to itself
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Provider ticker for an exchange ticker (identity when not aliased)
    pub fn to_provider<'a>(&'a self, exchange: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|a| a.exchange == exchange)
            .map_or(exchange, |a| a.provider.as_str())
    }

    /// Exchange ticker for a provider ticker (identity when not aliased)
    pub fn to_exchange<'a>(&'a self, provider: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|a| a.provider == provider)
            .map_or(provider, |a| a.exchange.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolAlias> {
        self.aliases.iter()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
