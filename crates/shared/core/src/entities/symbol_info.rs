use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::SymbolStatus;

/// Permission tag marking a symbol as tradable on the spot market
pub const SPOT_PERMISSION: &str = "SPOT";

/// One tradable symbol as listed by the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSymbolInfo {
    /// Exchange symbol, e.g. `BTCUSDT`
    pub symbol: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub permissions: BTreeSet<String>,
    pub status: SymbolStatus,
}

impl ExchangeSymbolInfo {
    pub fn new(
        symbol: impl Into<String>,
        base_asset: impl Into<String>,
        quote_asset: impl Into<String>,
        status: SymbolStatus,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            base_asset: base_asset.into(),
            quote_asset: quote_asset.into(),
            permissions: BTreeSet::new(),
            status,
        }
    }

    /// Builder: grant a permission tag (e.g. `SPOT`, `MARGIN`)
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    /// Spot trading (no margin, no derivatives) is permitted
    pub fn is_spot_permitted(&self) -> bool {
        self.permissions.contains(SPOT_PERMISSION)
    }

    /// The quote asset contains `quote`.
    ///
    /// Containment rather than equality: a quote of `USD` also admits
    /// `USDT` and `BUSD` pairs.
    pub fn is_quoted_in(&self, quote: &str) -> bool {
        self.quote_asset.contains(quote)
    }

    /// Quoted in `quote`, spot permitted and currently trading
    pub fn is_tradable_in(&self, quote: &str) -> bool {
        self.is_quoted_in(quote) && self.is_spot_permitted() && self.status.is_trading()
    }
}
