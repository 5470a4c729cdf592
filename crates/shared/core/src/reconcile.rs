//! Symbol reconciliation
//!
//! Joins the exchange's symbol list with a market-data ranking. Only symbols
//! quoted in the configured asset, spot permitted and currently trading take
//! part; their base asset is translated through the alias table and looked
//! up by exact ticker.

use std::collections::HashMap;

use crate::aliases::SymbolAliases;
use crate::entities::{ExchangeSymbolInfo, MarketDataEntry, TradingPair};

/// Rank lookup by provider ticker
///
/// When a snapshot lists the same ticker more than once, the first entry in
/// provider order wins.
#[derive(Debug, Default)]
pub struct RankIndex<'a> {
    ranks: HashMap<&'a str, u32>,
}

impl<'a> RankIndex<'a> {
    pub fn new(entries: &'a [MarketDataEntry]) -> Self {
        let mut ranks = HashMap::with_capacity(entries.len());
        for entry in entries {
            ranks.entry(entry.symbol.as_str()).or_insert(entry.rank);
        }
        Self { ranks }
    }

    pub fn rank_of(&self, symbol: &str) -> Option<u32> {
        self.ranks.get(symbol).copied()
    }
}

/// Outcome of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Tradable symbols that resolved to a rank, in exchange order
    pub pairs: Vec<TradingPair>,
    /// Base assets of tradable symbols missing from the ranking
    pub unresolved: Vec<String>,
}

impl Reconciliation {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Joins exchange symbols with market-data ranks
#[derive(Debug, Clone)]
pub struct SymbolReconciler {
    quote_asset: String,
    aliases: SymbolAliases,
}

impl SymbolReconciler {
    pub fn new(quote_asset: impl Into<String>, aliases: SymbolAliases) -> Self {
        Self {
            quote_asset: quote_asset.into(),
            aliases,
        }
    }

    pub fn quote_asset(&self) -> &str {
        &self.quote_asset
    }

    pub fn aliases(&self) -> &SymbolAliases {
        &self.aliases
    }

    /// Symbols eligible for any watchlist
    pub fn tradable<'s>(
        &'s self,
        symbols: &'s [ExchangeSymbolInfo],
    ) -> impl Iterator<Item = &'s ExchangeSymbolInfo> + 's {
        symbols
            .iter()
            .filter(move |s| s.is_tradable_in(&self.quote_asset))
    }

    /// Resolve a single symbol against the index.
    ///
    /// The returned pair carries the exchange symbol, never the alias.
    pub fn resolve(&self, symbol: &ExchangeSymbolInfo, index: &RankIndex) -> Option<TradingPair> {
        let provider_ticker = self.aliases.to_provider(&symbol.base_asset);
        index
            .rank_of(provider_ticker)
            .map(|rank| TradingPair::new(symbol.symbol.clone(), rank))
    }

    /// Reconcile every tradable symbol with `entries`
    pub fn reconcile(
        &self,
        symbols: &[ExchangeSymbolInfo],
        entries: &[MarketDataEntry],
    ) -> Reconciliation {
        let index = RankIndex::new(entries);
        let mut result = Reconciliation::default();

        for symbol in self.tradable(symbols) {
            match self.resolve(symbol, &index) {
                Some(pair) => result.pairs.push(pair),
                None => result.unresolved.push(symbol.base_asset.clone()),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SymbolStatus;

    fn spot(symbol: &str, base: &str, quote: &str) -> ExchangeSymbolInfo {
        ExchangeSymbolInfo::new(symbol, base, quote, SymbolStatus::Trading).with_permission("SPOT")
    }

    fn reconciler() -> SymbolReconciler {
        SymbolReconciler::new("USDT", SymbolAliases::default())
    }

    #[test]
    fn test_single_pair_resolves() {
        let symbols = vec![spot("BTCUSDT", "BTC", "USDT")];
        let entries = vec![MarketDataEntry::new("BTC", 1)];

        let result = reconciler().reconcile(&symbols, &entries);

        assert_eq!(result.pairs, vec![TradingPair::new("BTCUSDT", 1)]);
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_ineligible_symbols_are_excluded() {
        let symbols = vec![
            spot("ETHBTC", "ETH", "BTC"),
            ExchangeSymbolInfo::new("ADAUSDT", "ADA", "USDT", SymbolStatus::Trading)
                .with_permission("MARGIN"),
            ExchangeSymbolInfo::new("XRPUSDT", "XRP", "USDT", SymbolStatus::Halt)
                .with_permission("SPOT"),
            spot("SOLUSDT", "SOL", "USDT"),
        ];
        let entries = vec![
            MarketDataEntry::new("ETH", 2),
            MarketDataEntry::new("ADA", 8),
            MarketDataEntry::new("XRP", 6),
            MarketDataEntry::new("SOL", 5),
        ];

        let result = reconciler().reconcile(&symbols, &entries);

        assert_eq!(result.pairs, vec![TradingPair::new("SOLUSDT", 5)]);
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_aliases_resolve_and_keep_exchange_symbol() {
        let symbols = vec![spot("IOTAUSDT", "IOTA", "USDT"), spot("GXSUSDT", "GXS", "USDT")];
        let entries = vec![MarketDataEntry::new("MIOTA", 77), MarketDataEntry::new("GXC", 612)];

        let result = reconciler().reconcile(&symbols, &entries);

        assert_eq!(
            result.pairs,
            vec![TradingPair::new("IOTAUSDT", 77), TradingPair::new("GXSUSDT", 612)]
        );
    }

    #[test]
    fn test_alias_does_not_match_provider_ticker_verbatim() {
        // The provider lists IOTA only as MIOTA
        let symbols = vec![spot("IOTAUSDT", "IOTA", "USDT")];
        let entries = vec![MarketDataEntry::new("IOTA", 3)];

        let result = reconciler().reconcile(&symbols, &entries);

        assert!(result.pairs.is_empty());
        assert_eq!(result.unresolved, vec!["IOTA".to_string()]);
    }

    #[test]
    fn test_missing_symbol_is_dropped_not_fatal() {
        let symbols = vec![spot("BTCUSDT", "BTC", "USDT"), spot("NEWUSDT", "NEW", "USDT")];
        let entries = vec![MarketDataEntry::new("BTC", 1)];

        let result = reconciler().reconcile(&symbols, &entries);

        assert_eq!(result.pairs, vec![TradingPair::new("BTCUSDT", 1)]);
        assert_eq!(result.unresolved, vec!["NEW".to_string()]);
    }

    #[test]
    fn test_duplicate_provider_symbol_first_wins() {
        let entries = vec![MarketDataEntry::new("UNI", 20), MarketDataEntry::new("UNI", 1450)];
        let index = RankIndex::new(&entries);

        assert_eq!(index.rank_of("UNI"), Some(20));
        assert_eq!(index.rank_of("SUSHI"), None);
    }

    #[test]
    fn test_every_matching_quote_pair_is_kept() {
        let r = SymbolReconciler::new("USD", SymbolAliases::empty());
        let symbols = vec![spot("BTCUSDT", "BTC", "USDT"), spot("BTCUSDC", "BTC", "USDC")];
        let entries = vec![MarketDataEntry::new("BTC", 1)];

        let result = r.reconcile(&symbols, &entries);

        assert_eq!(
            result.pairs,
            vec![TradingPair::new("BTCUSDT", 1), TradingPair::new("BTCUSDC", 1)]
        );
    }
}
