use std::path::PathBuf;

use chrono::NaiveDate;
use watchlist_core::naming::ranked_file_name;
use watchlist_core::{
    ExchangeSymbolInfo, MarketDataEntry, RankedWatchlist, SymbolReconciler, WatchlistBuilder,
};

use crate::error::Result;
use crate::output::OutputDir;

/// Files written by the general watchlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedReport {
    pub files: Vec<PathBuf>,
    pub symbols: usize,
    pub unresolved: usize,
}

/// General watchlist: every tradable pair, grouped in rank sections
pub struct RankedPipeline<'a> {
    reconciler: &'a SymbolReconciler,
    builder: &'a WatchlistBuilder,
    section_headers: bool,
}

impl<'a> RankedPipeline<'a> {
    pub fn new(
        reconciler: &'a SymbolReconciler,
        builder: &'a WatchlistBuilder,
        section_headers: bool,
    ) -> Self {
        Self {
            reconciler,
            builder,
            section_headers,
        }
    }

    pub fn build(
        &self,
        symbols: &[ExchangeSymbolInfo],
        listings: &[MarketDataEntry],
    ) -> (RankedWatchlist, usize) {
        let reconciliation = self.reconciler.reconcile(symbols, listings);
        for base in &reconciliation.unresolved {
            log::warn!("{} not found in the market-cap ranking, skipped", base);
        }

        (
            self.builder.ranked(&reconciliation.pairs),
            reconciliation.unresolved.len(),
        )
    }

    /// Build and write the ranked watchlist files stamped with `date`
    pub fn run(
        &self,
        symbols: &[ExchangeSymbolInfo],
        listings: &[MarketDataEntry],
        out: &OutputDir,
        date: NaiveDate,
    ) -> Result<RankedReport> {
        let (watchlist, unresolved) = self.build(symbols, listings);
        let mut files = Vec::with_capacity(2);

        if self.section_headers {
            files.push(out.write(
                ranked_file_name(true, date),
                &watchlist.with_sections().serialize(),
            )?);
        }
        files.push(out.write(
            ranked_file_name(false, date),
            &watchlist.without_sections().serialize(),
        )?);

        log::info!(
            "General watchlist: {} symbols, {} unresolved",
            watchlist.symbol_count(),
            unresolved
        );

        Ok(RankedReport {
            files,
            symbols: watchlist.symbol_count(),
            unresolved,
        })
    }
}
