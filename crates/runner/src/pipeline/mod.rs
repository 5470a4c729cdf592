//! Watchlist pipelines
//!
//! Both pipelines reconcile exchange symbols against a set of ranked coins
//! and hand the surviving pairs to the builder. They differ in where the
//! coins come from and in the shape of the output.

mod categorized;
mod ranked;

pub use categorized::{CategoryPipeline, CategoryReport};
pub use ranked::{RankedPipeline, RankedReport};
