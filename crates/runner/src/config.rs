//! Run configuration
//!
//! One immutable [`WatchlistConfig`] is assembled at startup from, in order:
//! built-in defaults, an optional JSON file, the environment and command-line
//! flags. Components receive the pieces they need at construction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use watchlist_core::{SymbolAliases, SymbolReconciler, WatchlistBuilder, WatchlistFormat};
use watchlist_gateway::{BinanceClient, CoinMarketCapEnvironment, RateLimitConfig};

/// Environment variable holding the CoinMarketCap API key
pub const API_KEY_ENV: &str = "CMC_API_KEY";

/// Environment variable overriding the output directory
pub const OUTPUT_DIR_ENV: &str = "WATCHLIST_OUTPUT_DIR";

/// Largest `limit` the CoinMarketCap listing endpoint accepts
pub const MAX_LISTING_LIMIT: u32 = 5000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("CoinMarketCap API key missing: set CMC_API_KEY")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Request throttling as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    /// Minimum spacing between CoinMarketCap requests
    pub min_interval_ms: u64,
    /// Maximum CoinMarketCap requests in flight
    pub max_concurrent: usize,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        let defaults = RateLimitConfig::default();
        Self {
            min_interval_ms: defaults.min_interval.as_millis() as u64,
            max_concurrent: defaults.max_concurrent,
        }
    }
}

impl From<RateLimitSettings> for RateLimitConfig {
    fn from(settings: RateLimitSettings) -> Self {
        RateLimitConfig::new(
            Duration::from_millis(settings.min_interval_ms),
            settings.max_concurrent,
        )
    }
}

/// Root configuration of a watchlist run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchlistConfig {
    /// Quote asset pairs must be priced in, e.g. `USDT`, `BNB`, `BTC`
    pub quote_asset: String,

    /// Number of coins requested from the listing; also the last ranked section
    pub max_rank: u32,

    /// Also write the watchlist with `###` rank section headers
    pub section_headers: bool,

    /// Generate one watchlist per CoinMarketCap category
    pub categories: bool,

    /// Prefix of every symbol token
    pub exchange_prefix: String,

    /// Text of the rank section headers
    pub section_label: String,

    /// Exchange ↔ provider ticker mismatches
    pub aliases: SymbolAliases,

    pub rate_limit: RateLimitSettings,

    /// Removed and recreated on every run
    pub output_dir: PathBuf,

    pub binance_base_url: String,

    pub coinmarketcap_base_url: String,

    /// Only ever read from the environment
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            quote_asset: "USDT".to_string(),
            max_rank: 1500,
            section_headers: true,
            categories: true,
            exchange_prefix: "BINANCE".to_string(),
            section_label: "CoinMarketCap Ranks".to_string(),
            aliases: SymbolAliases::default(),
            rate_limit: RateLimitSettings::default(),
            output_dir: PathBuf::from("output"),
            binance_base_url: BinanceClient::DEFAULT_BASE_URL.to_string(),
            coinmarketcap_base_url: CoinMarketCapEnvironment::Production.base_url().to_string(),
            api_key: None,
        }
    }
}

impl WatchlistConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `CMC_API_KEY` and `WATCHLIST_OUTPUT_DIR` from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|d| !d.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        self
    }

    /// Point the market-data client at the CoinMarketCap sandbox
    pub fn with_sandbox(mut self) -> Self {
        self.coinmarketcap_base_url = CoinMarketCapEnvironment::Sandbox.base_url().to_string();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quote_asset.trim().is_empty() {
            return Err(ConfigError::Invalid("quote_asset is empty".to_string()));
        }
        if self.max_rank == 0 || self.max_rank > MAX_LISTING_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_rank must be between 1 and {}",
                MAX_LISTING_LIMIT
            )));
        }
        if let Some(alias) = self
            .aliases
            .iter()
            .find(|a| a.exchange.trim().is_empty() || a.provider.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "alias {:?} -> {:?} has an empty ticker",
                alias.exchange, alias.provider
            )));
        }
        if self.rate_limit.max_concurrent == 0 {
            return Err(ConfigError::Invalid(
                "rate_limit.max_concurrent must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    pub fn rate_limit_config(&self) -> RateLimitConfig {
        self.rate_limit.into()
    }

    pub fn watchlist_format(&self) -> WatchlistFormat {
        WatchlistFormat {
            exchange_prefix: self.exchange_prefix.clone(),
            section_label: self.section_label.clone(),
        }
    }

    pub fn reconciler(&self) -> SymbolReconciler {
        SymbolReconciler::new(self.quote_asset.clone(), self.aliases.clone())
    }

    pub fn builder(&self) -> WatchlistBuilder {
        WatchlistBuilder::new(self.watchlist_format(), self.max_rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = WatchlistConfig::default();

        assert_eq!(config.quote_asset, "USDT");
        assert_eq!(config.max_rank, 1500);
        assert!(config.section_headers);
        assert_eq!(config.aliases.to_provider("IOTA"), "MIOTA");
        assert_eq!(
            config.rate_limit_config(),
            RateLimitConfig::new(Duration::from_millis(2500), 1)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WatchlistConfig::from_json(
            r#"{
                "quote_asset": "BTC",
                "rate_limit": {"min_interval_ms": 100},
                "aliases": [{"exchange": "IOTA", "provider": "MIOTA"}]
            }"#,
        )
        .unwrap();

        assert_eq!(config.quote_asset, "BTC");
        assert_eq!(config.max_rank, 1500);
        assert_eq!(config.rate_limit.min_interval_ms, 100);
        assert_eq!(config.rate_limit.max_concurrent, 1);
        assert_eq!(config.aliases.len(), 1);
        assert_eq!(config.aliases.to_provider("GXS"), "GXS");
    }

    #[test]
    fn test_api_key_is_not_read_from_file() {
        let config = WatchlistConfig::from_json(r#"{"api_key": "leaked"}"#).unwrap();
        assert!(matches!(config.api_key(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (API_KEY_ENV, " b54bcf4d-key "),
            (OUTPUT_DIR_ENV, "/tmp/watchlists"),
        ]
        .into_iter()
        .collect();

        let config = WatchlistConfig::default()
            .with_env_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_key().unwrap(), "b54bcf4d-key");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/watchlists"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = WatchlistConfig::default().with_env_from(|key| {
            (key == API_KEY_ENV).then(|| "  ".to_string())
        });
        assert!(config.api_key().is_err());
    }

    #[test]
    fn test_sandbox() {
        let config = WatchlistConfig::default().with_sandbox();
        assert_eq!(
            config.coinmarketcap_base_url,
            "https://sandbox-api.coinmarketcap.com"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = WatchlistConfig::default();
        config.rate_limit.max_concurrent = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = WatchlistConfig::default();
        config.max_rank = 0;
        assert!(config.validate().is_err());

        let mut config = WatchlistConfig::default();
        config.quote_asset = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_max_rank_by_listing_limit() {
        let mut config = WatchlistConfig::default();
        config.max_rank = MAX_LISTING_LIMIT;
        assert!(config.validate().is_ok());

        config.max_rank = u32::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_blank_alias() {
        let config = WatchlistConfig::from_json(
            r#"{"aliases": [{"exchange": "IOTA", "provider": ""}]}"#,
        )
        .unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = WatchlistConfig::from_file("/nonexistent/watchlist.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
