//! Watchlist Clock Infrastructure
//!
//! Provides the date sources behind the `Clock` port:
//!
//! - [`SystemClock`]: today's date in local time, for production runs
//! - [`FixedClock`]: a pinned date, for tests and reproducible file names

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use watchlist_ports::Clock;
