use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use watchlist_core::naming::{CATEGORY_DIR, category_file_name};
use watchlist_core::{Category, ExchangeSymbolInfo, SymbolReconciler, Watchlist, WatchlistBuilder};

use crate::error::Result;
use crate::output::OutputDir;

/// Outcome of the category pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    pub files: Vec<PathBuf>,
    /// Names of categories with no tradable coin
    pub skipped: Vec<String>,
}

/// One flat watchlist per provider category
pub struct CategoryPipeline<'a> {
    reconciler: &'a SymbolReconciler,
    builder: &'a WatchlistBuilder,
}

impl<'a> CategoryPipeline<'a> {
    pub fn new(reconciler: &'a SymbolReconciler, builder: &'a WatchlistBuilder) -> Self {
        Self {
            reconciler,
            builder,
        }
    }

    /// Watchlist for a single category, `None` when nothing is tradable
    pub fn build(&self, symbols: &[ExchangeSymbolInfo], category: &Category) -> Option<Watchlist> {
        log::info!("Category {}: {}", category.name, category.description);

        let reconciliation = self.reconciler.reconcile(symbols, &category.coins);
        for base in &reconciliation.unresolved {
            log::debug!("{} is not part of category {}", base, category.name);
        }
        for coin in self.untradable_coins(symbols, category) {
            log::debug!(
                "{} of category {} has no tradable {} pair",
                coin,
                category.name,
                self.reconciler.quote_asset()
            );
        }

        if reconciliation.is_empty() {
            log::warn!(
                "Category {} has no tradable {} pair, no watchlist written",
                category.name,
                self.reconciler.quote_asset()
            );
            return None;
        }

        Some(self.builder.categorized(&reconciliation.pairs))
    }

    /// Member coins with no tradable pair, as exchange tickers
    pub fn untradable_coins(
        &self,
        symbols: &[ExchangeSymbolInfo],
        category: &Category,
    ) -> Vec<String> {
        let tradable: HashSet<&str> = self
            .reconciler
            .tradable(symbols)
            .map(|s| s.base_asset.as_str())
            .collect();
        let aliases = self.reconciler.aliases();

        category
            .coins
            .iter()
            .map(|coin| aliases.to_exchange(&coin.symbol))
            .filter(|ticker| !tradable.contains(ticker))
            .map(str::to_string)
            .collect()
    }

    pub fn run(
        &self,
        symbols: &[ExchangeSymbolInfo],
        categories: &[Category],
        out: &OutputDir,
        date: NaiveDate,
    ) -> Result<CategoryReport> {
        let mut report = CategoryReport::default();

        for category in categories {
            match self.build(symbols, category) {
                Some(watchlist) => {
                    let name = category_file_name(&category.name, &category.id, date);
                    let path =
                        out.write(Path::new(CATEGORY_DIR).join(name), &watchlist.serialize())?;
                    log::debug!("Wrote {}", path.display());
                    report.files.push(path);
                }
                None => report.skipped.push(category.name.clone()),
            }
        }

        log::info!(
            "Category watchlists: {} written, {} skipped",
            report.files.len(),
            report.skipped.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use watchlist_core::{MarketDataEntry, SymbolAliases, SymbolStatus, WatchlistFormat};

    fn spot(symbol: &str, base: &str) -> ExchangeSymbolInfo {
        ExchangeSymbolInfo::new(symbol, base, "USDT", SymbolStatus::Trading).with_permission("SPOT")
    }

    fn category(id: &str, name: &str, coins: &[(&str, u32)]) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} coins", name),
            coins: coins
                .iter()
                .map(|(symbol, rank)| MarketDataEntry::new(*symbol, *rank))
                .collect(),
        }
    }

    fn parts() -> (SymbolReconciler, WatchlistBuilder) {
        (
            SymbolReconciler::new("USDT", SymbolAliases::default()),
            WatchlistBuilder::new(WatchlistFormat::default(), 1500),
        )
    }

    #[test]
    fn test_category_sorted_by_rank_without_headers() {
        let (reconciler, builder) = parts();
        let pipeline = CategoryPipeline::new(&reconciler, &builder);
        let symbols = [spot("UNIUSDT", "UNI"), spot("AAVEUSDT", "AAVE"), spot("BTCUSDT", "BTC")];

        let watchlist = pipeline
            .build(&symbols, &category("6051", "DeFi", &[("UNI", 20), ("AAVE", 15), ("COMP", 90)]))
            .unwrap();

        assert_eq!(watchlist.serialize(), "BINANCE:AAVEUSDT,BINANCE:UNIUSDT");
    }

    #[test]
    fn test_untradable_coins_use_exchange_tickers() {
        let (reconciler, builder) = parts();
        let pipeline = CategoryPipeline::new(&reconciler, &builder);
        let symbols = [spot("BTCUSDT", "BTC"), spot("GXSUSDT", "GXS")];
        let iot = category("3", "IoT", &[("MIOTA", 45), ("GXC", 300), ("BTC", 1), ("HNT", 80)]);

        let missing = pipeline.untradable_coins(&symbols, &iot);

        assert_eq!(missing, vec!["IOTA".to_string(), "HNT".to_string()]);
    }

    #[test]
    fn test_empty_category_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let out = OutputDir::new(tmp.path());
        let (reconciler, builder) = parts();
        let pipeline = CategoryPipeline::new(&reconciler, &builder);
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let report = pipeline
            .run(
                &[spot("BTCUSDT", "BTC")],
                &[
                    category("1", "Memes", &[("DOGE", 8)]),
                    category("2", "Store of Value", &[("BTC", 1)]),
                ],
                &out,
                date,
            )
            .unwrap();

        assert_eq!(report.skipped, vec!["Memes".to_string()]);
        assert_eq!(
            report.files,
            vec![tmp
                .path()
                .join("categorized")
                .join("binance_watchlist_store_of_value_category_on_09-03-2024.txt")]
        );
        assert_eq!(
            std::fs::read_to_string(&report.files[0]).unwrap(),
            "BINANCE:BTCUSDT"
        );
    }
}
