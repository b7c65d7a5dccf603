//! Core domain logic, independent of any rendering.

pub mod config;
pub mod log;
pub mod market;
pub mod metrics;
pub mod poll;
pub mod pricing;
pub mod state;

// Re-export main types for cleaner imports
pub use market::{AssetSnapshot, ChartRange, MarketProvider, SortMode};
pub use pricing::{BreakEvenRequest, BreakEvenTarget, PricingError};
