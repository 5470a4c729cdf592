use async_trait::async_trait;
use watchlist_core::ExchangeSymbolInfo;
use watchlist_ports::{ExchangeInfoSource, FetchResult};

use crate::error::RestError;
use crate::messages::binance::ExchangeInfoResponse;
use crate::rest::RestClient;

/// Binance spot REST API
#[derive(Clone)]
pub struct BinanceClient {
    rest: RestClient,
}

impl BinanceClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.binance.com";
    pub const EXCHANGE_INFO_PATH: &'static str = "/api/v3/exchangeInfo";

    pub fn new(base_url: impl Into<String>) -> Self {
        BinanceClient {
            rest: RestClient::new(base_url),
        }
    }

    /// Get every symbol listed on the exchange
    pub async fn exchange_info(&self) -> Result<Vec<ExchangeSymbolInfo>, RestError> {
        let resp: ExchangeInfoResponse = self.rest.get(Self::EXCHANGE_INFO_PATH, &[]).await?;
        Ok(resp.into_symbols())
    }
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ExchangeInfoSource for BinanceClient {
    async fn exchange_symbols(&self) -> FetchResult<Vec<ExchangeSymbolInfo>> {
        let symbols = self.exchange_info().await?;
        log::info!("Binance lists {} symbols", symbols.len());
        Ok(symbols)
    }
}
