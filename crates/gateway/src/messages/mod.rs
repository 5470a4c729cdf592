//! Wire message types
//!
//! Response shapes of the upstream REST APIs and their conversion into
//! domain types. Field names follow each API's JSON.

pub mod binance;
pub mod coinmarketcap;
