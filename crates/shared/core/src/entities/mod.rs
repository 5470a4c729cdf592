mod category;
mod market_data;
mod symbol_info;
mod symbol_status;
mod trading_pair;

pub use category::{Category, CategorySummary};
pub use market_data::MarketDataEntry;
pub use symbol_info::{ExchangeSymbolInfo, SPOT_PERMISSION};
pub use symbol_status::SymbolStatus;
pub use trading_pair::TradingPair;
