//! Derived market metrics: the activity ratio, trade signals and the
//! gainers/losers split.

use crate::core::market::AssetSnapshot;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MetricError {
    /// Volume relative to a zero market cap has no meaning.
    #[error("activity ratio is undefined for market cap {0}")]
    UndefinedRatio(f64),
}

/// Trading volume as a percentage of market capitalization. Used purely
/// for ranking how actively an asset trades relative to its size.
pub fn activity_ratio(total_volume: f64, market_cap: f64) -> Result<f64, MetricError> {
    if market_cap <= 0.0 {
        return Err(MetricError::UndefinedRatio(market_cap));
    }
    Ok((total_volume / market_cap) * 100.0)
}

/// Ranking policy for assets without a defined ratio: they score 0 and
/// sink to the bottom of the activity sort. The feed occasionally lists
/// assets with a zero market cap and this keeps them out of the top spots
/// without dropping them from the table.
pub fn activity_ratio_or_zero(total_volume: f64, market_cap: f64) -> f64 {
    activity_ratio(total_volume, market_cap).unwrap_or(0.0)
}

/// A coarse hint derived from the 24h price change, shown next to each
/// asset in the market table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Price dropped more than 2% over 24h.
    Discount,
    /// Price rose more than 5% over 24h.
    Peak,
    Steady,
}

impl Signal {
    pub fn classify(change_24h_pct: f64) -> Self {
        if change_24h_pct < -2.0 {
            Signal::Discount
        } else if change_24h_pct > 5.0 {
            Signal::Peak
        } else {
            Signal::Steady
        }
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Signal::Discount => "Discount",
            Signal::Peak => "Peak",
            Signal::Steady => "Steady",
        };
        write!(f, "{text}")
    }
}

/// Top and bottom movers by 24h price change.
#[derive(Debug, Default)]
pub struct Movers {
    /// Best performers, best first. At most three.
    pub gainers: Vec<AssetSnapshot>,
    /// Worst performers, worst first. At most three.
    pub losers: Vec<AssetSnapshot>,
}

/// Splits a snapshot collection into the top three gainers and bottom
/// three losers. With fewer than seven assets the same asset may appear
/// in both panels, mirroring its position in the sorted list.
pub fn split_movers(assets: &[AssetSnapshot]) -> Movers {
    if assets.is_empty() {
        return Movers::default();
    }

    let mut sorted: Vec<AssetSnapshot> = assets.to_vec();
    sorted.sort_by(|a, b| {
        b.change_24h_pct
            .partial_cmp(&a.change_24h_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let take = sorted.len().min(3);
    let gainers = sorted[..take].to_vec();
    let mut losers: Vec<AssetSnapshot> = sorted[sorted.len() - take..].to_vec();
    losers.reverse();

    Movers { gainers, losers }
}
