use serde::{Deserialize, Serialize};

/// Exchange-side trading status of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolStatus {
    PreTrading,
    /// Open for trading
    Trading,
    PostTrading,
    EndOfDay,
    /// Trading halted by the exchange
    Halt,
    AuctionMatch,
    Break,
    /// Any status the exchange introduced after this enum was written
    #[serde(other)]
    Unknown,
}

impl SymbolStatus {
    /// Returns true if orders can currently be placed on the symbol
    pub fn is_trading(&self) -> bool {
        matches!(self, SymbolStatus::Trading)
    }
}
