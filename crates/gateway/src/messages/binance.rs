//! Binance `exchangeInfo` response

use serde::Deserialize;
use watchlist_core::{ExchangeSymbolInfo, SymbolStatus};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfoResponse {
    pub symbols: Vec<SymbolDto>,
}

/// One entry of `exchangeInfo.symbols`
///
/// Binance has been moving permissions from the flat `permissions` list to
/// `permissionSets` (a list of alternative permission groups); either may be
/// empty or missing, so both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDto {
    pub symbol: String,
    pub status: SymbolStatus,
    pub base_asset: String,
    pub quote_asset: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub permission_sets: Vec<Vec<String>>,
}

impl From<SymbolDto> for ExchangeSymbolInfo {
    fn from(dto: SymbolDto) -> Self {
        let mut info =
            ExchangeSymbolInfo::new(dto.symbol, dto.base_asset, dto.quote_asset, dto.status);
        info.permissions.extend(dto.permissions);
        info.permissions
            .extend(dto.permission_sets.into_iter().flatten());
        info
    }
}

impl ExchangeInfoResponse {
    pub fn into_symbols(self) -> Vec<ExchangeSymbolInfo> {
        self.symbols.into_iter().map(ExchangeSymbolInfo::from).collect()
    }
}
