//! Watchlist building and serialization
//!
//! A watchlist is a comma-joined sequence of tokens. A token is either a
//! section header (`###CoinMarketCap Ranks 1-10`) or an exchange-prefixed
//! symbol (`BINANCE:BTCUSDT`). Headers are recognisable from their prefix
//! alone, so stripping them is a filter over token text.

use std::collections::BTreeMap;
use std::fmt;

use crate::entities::TradingPair;

/// Marks a token as a section header
pub const SECTION_PREFIX: &str = "###";

/// Separator between serialized tokens
pub const TOKEN_SEPARATOR: &str = ",";

/// Width of a rank section
pub const RANK_BUCKET_WIDTH: u32 = 10;

/// Text conventions of the emitted tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistFormat {
    /// Exchange prefix of every symbol token, e.g. `BINANCE`
    pub exchange_prefix: String,
    /// Leading text of every section header, e.g. `CoinMarketCap Ranks`
    pub section_label: String,
}

impl Default for WatchlistFormat {
    fn default() -> Self {
        Self {
            exchange_prefix: "BINANCE".to_string(),
            section_label: "CoinMarketCap Ranks".to_string(),
        }
    }
}

impl WatchlistFormat {
    pub fn symbol_token(&self, symbol: &str) -> String {
        format!("{}:{}", self.exchange_prefix, symbol)
    }

    pub fn section_token(&self, bucket: RankBucket) -> String {
        format!(
            "{}{} {}-{}",
            SECTION_PREFIX, self.section_label, bucket.lower, bucket.upper
        )
    }
}

/// Inclusive rank range `lower..=upper` of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankBucket {
    pub lower: u32,
    pub upper: u32,
}

impl RankBucket {
    /// Bucket covering `rank`.
    ///
    /// Rank 0 belongs to no bucket, and neither does a rank whose bucket
    /// would end past `u32::MAX`.
    pub fn containing(rank: u32) -> Option<Self> {
        if rank == 0 {
            return None;
        }
        let upper = rank
            .div_ceil(RANK_BUCKET_WIDTH)
            .checked_mul(RANK_BUCKET_WIDTH)?;
        Some(Self {
            lower: upper - RANK_BUCKET_WIDTH + 1,
            upper,
        })
    }
}

/// An ordered token sequence ready to be written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    tokens: Vec<String>,
}

impl Watchlist {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn is_section(token: &str) -> bool {
        token.starts_with(SECTION_PREFIX)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of symbol (non-header) tokens
    pub fn symbol_count(&self) -> usize {
        self.tokens.iter().filter(|t| !Self::is_section(t)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The same watchlist with every section header removed
    pub fn without_sections(&self) -> Watchlist {
        Watchlist {
            tokens: self
                .tokens
                .iter()
                .filter(|t| !Self::is_section(t))
                .cloned()
                .collect(),
        }
    }

    /// Tokens joined by `,` with no trailing separator
    pub fn serialize(&self) -> String {
        self.tokens.join(TOKEN_SEPARATOR)
    }
}

impl fmt::Display for Watchlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Both variants of the rank-sectioned watchlist, from one bucketing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWatchlist {
    with_sections: Watchlist,
    without_sections: Watchlist,
}

impl RankedWatchlist {
    fn new(with_sections: Watchlist) -> Self {
        let without_sections = with_sections.without_sections();
        Self {
            with_sections,
            without_sections,
        }
    }

    pub fn with_sections(&self) -> &Watchlist {
        &self.with_sections
    }

    pub fn without_sections(&self) -> &Watchlist {
        &self.without_sections
    }

    pub fn symbol_count(&self) -> usize {
        self.without_sections.tokens.len()
    }
}

/// Turns reconciled pairs into watchlists
#[derive(Debug, Clone)]
pub struct WatchlistBuilder {
    format: WatchlistFormat,
    max_rank: u32,
}

impl WatchlistBuilder {
    pub fn new(format: WatchlistFormat, max_rank: u32) -> Self {
        Self { format, max_rank }
    }

    pub fn format(&self) -> &WatchlistFormat {
        &self.format
    }

    /// Upper bound of the last section: `max_rank` rounded up to the bucket
    /// width, saturating at `u32::MAX`
    pub fn rank_ceiling(&self) -> u32 {
        self.max_rank
            .div_ceil(RANK_BUCKET_WIDTH)
            .saturating_mul(RANK_BUCKET_WIDTH)
    }

    /// Group pairs into rank sections, ascending by rank within each.
    ///
    /// Empty sections are omitted; pairs outside `1..=rank_ceiling()` are
    /// left out.
    pub fn ranked(&self, pairs: &[TradingPair]) -> RankedWatchlist {
        let ceiling = self.rank_ceiling();
        let mut buckets: BTreeMap<RankBucket, Vec<&TradingPair>> = BTreeMap::new();

        for pair in pairs {
            match RankBucket::containing(pair.rank) {
                Some(bucket) if bucket.upper <= ceiling => {
                    buckets.entry(bucket).or_default().push(pair)
                }
                _ => log::debug!("{} rank {} is outside the ranked range", pair.symbol, pair.rank),
            }
        }

        let mut tokens = Vec::with_capacity(pairs.len() + buckets.len());
        for (bucket, mut members) in buckets {
            members.sort_by_key(|p| p.rank);
            tokens.push(self.format.section_token(bucket));
            tokens.extend(members.iter().map(|p| self.format.symbol_token(&p.symbol)));
        }

        RankedWatchlist::new(Watchlist::from_tokens(tokens))
    }

    /// A single flat list ascending by rank, no headers
    pub fn categorized(&self, pairs: &[TradingPair]) -> Watchlist {
        let mut sorted: Vec<&TradingPair> = pairs.iter().collect();
        sorted.sort_by_key(|p| p.rank);

        Watchlist::from_tokens(
            sorted
                .iter()
                .map(|p| self.format.symbol_token(&p.symbol))
                .collect(),
        )
    }
}
