//! Market data feed implementations.

pub mod coingecko;

pub use coingecko::CoinGeckoProvider;
