//! CoinMarketCap Pro API responses
//!
//! Every endpoint wraps its payload in `{ "status": {...}, "data": ... }`.
//! A non-zero `status.error_code` means the call failed even when the HTTP
//! status says otherwise.

use serde::Deserialize;
use watchlist_core::{Category, CategorySummary, MarketDataEntry};

use crate::error::RestError;

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: ApiStatus,
    pub data: Option<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub error_code: i64,
    pub error_message: Option<String>,
    #[serde(default)]
    pub credit_count: u32,
}

impl<T> Envelope<T> {
    /// The payload, or the provider's error
    pub fn into_data(self) -> Result<T, RestError> {
        if self.status.error_code != 0 {
            return Err(RestError::Api {
                code: self.status.error_code,
                msg: self.status.error_message.unwrap_or_default(),
            });
        }
        log::debug!("CoinMarketCap call used {} credit(s)", self.status.credit_count);
        self.data
            .ok_or_else(|| RestError::Parse("response has no data".to_string()))
    }
}

/// A coin as listed by `listings/latest` and inside `category.coins`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub symbol: String,
    pub cmc_rank: Option<u32>,
}

impl CoinDto {
    /// Unranked coins cannot be placed in a watchlist
    pub fn into_entry(self) -> Option<MarketDataEntry> {
        match self.cmc_rank {
            Some(rank) => Some(MarketDataEntry::new(self.symbol, rank)),
            None => {
                log::debug!("{} ({}) has no rank, skipping", self.symbol, self.name);
                None
            }
        }
    }
}

pub fn into_entries(coins: Vec<CoinDto>) -> Vec<MarketDataEntry> {
    coins.into_iter().filter_map(CoinDto::into_entry).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySummaryDto {
    pub id: String,
    pub name: String,
}

impl From<CategorySummaryDto> for CategorySummary {
    fn from(dto: CategorySummaryDto) -> Self {
        CategorySummary::new(dto.id, dto.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub coins: Vec<CoinDto>,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: dto.id,
            name: dto.name,
            description: dto.description.unwrap_or_default(),
            coins: into_entries(dto.coins),
        }
    }
}
