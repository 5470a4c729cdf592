use async_trait::async_trait;
use watchlist_core::{Category, CategorySummary, MarketDataEntry};
use watchlist_ports::{FetchResult, MarketDataSource};

use crate::error::RestError;
use crate::messages::coinmarketcap::{
    CategoryDto, CategorySummaryDto, CoinDto, Envelope, into_entries,
};
use crate::rest::RestClient;

/// Which CoinMarketCap deployment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoinMarketCapEnvironment {
    #[default]
    Production,
    /// Returns mock data; useful to check a key and the wiring
    Sandbox,
}

impl CoinMarketCapEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            CoinMarketCapEnvironment::Production => "https://pro-api.coinmarketcap.com",
            CoinMarketCapEnvironment::Sandbox => "https://sandbox-api.coinmarketcap.com",
        }
    }
}

/// CoinMarketCap Pro API client
///
/// Not throttled by itself; wrap it in [`Throttled`](super::Throttled).
#[derive(Clone)]
pub struct CoinMarketCapClient {
    rest: RestClient,
}

impl CoinMarketCapClient {
    pub const API_KEY_HEADER: &'static str = "X-CMC_PRO_API_KEY";
    pub const LISTINGS_PATH: &'static str = "/v1/cryptocurrency/listings/latest";
    pub const CATEGORIES_PATH: &'static str = "/v1/cryptocurrency/categories";
    pub const CATEGORY_PATH: &'static str = "/v1/cryptocurrency/category";

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        CoinMarketCapClient {
            rest: RestClient::new(base_url).with_header(Self::API_KEY_HEADER, api_key),
        }
    }

    pub fn for_environment(env: CoinMarketCapEnvironment, api_key: impl Into<String>) -> Self {
        Self::new(env.base_url(), api_key)
    }

    /// Latest listing sorted by market cap, descending
    pub async fn listings_latest(
        &self,
        start: u32,
        limit: u32,
    ) -> Result<Vec<MarketDataEntry>, RestError> {
        let query = [
            ("start", start.to_string()),
            ("limit", limit.to_string()),
            ("sort", "market_cap".to_string()),
            ("sort_dir", "desc".to_string()),
        ];
        let resp: Envelope<Vec<CoinDto>> = self.rest.get(Self::LISTINGS_PATH, &query).await?;
        Ok(into_entries(resp.into_data()?))
    }

    pub async fn list_categories(&self) -> Result<Vec<CategorySummary>, RestError> {
        let resp: Envelope<Vec<CategorySummaryDto>> =
            self.rest.get(Self::CATEGORIES_PATH, &[]).await?;
        Ok(resp
            .into_data()?
            .into_iter()
            .map(CategorySummary::from)
            .collect())
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, RestError> {
        let query = [("id", id.to_string())];
        let resp: Envelope<CategoryDto> = self.rest.get(Self::CATEGORY_PATH, &query).await?;
        Ok(Category::from(resp.into_data()?))
    }
}

#[async_trait]
impl MarketDataSource for CoinMarketCapClient {
    async fn listings(&self, start: u32, limit: u32) -> FetchResult<Vec<MarketDataEntry>> {
        let entries = self.listings_latest(start, limit).await?;
        log::info!("CoinMarketCap listing returned {} ranked coins", entries.len());
        Ok(entries)
    }

    async fn categories(&self) -> FetchResult<Vec<CategorySummary>> {
        let categories = self.list_categories().await?;
        log::info!("CoinMarketCap lists {} categories", categories.len());
        Ok(categories)
    }

    async fn category(&self, id: &str) -> FetchResult<Category> {
        Ok(self.get_category(id).await?)
    }
}
