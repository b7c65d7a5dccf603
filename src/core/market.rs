//! Market data abstractions and core types.

use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Display;
use std::str::FromStr;

/// One point-in-time record for a tradable asset, as delivered by the
/// listing feed plus the derived activity ratio. Replaced wholesale on
/// every refresh, never mutated in place.
#[derive(Debug, Clone)]
pub struct AssetSnapshot {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub change_24h_pct: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    /// Position in the feed's market-cap ordering. Missing for some edge
    /// assets; those rank last.
    pub rank: Option<u32>,
    /// Hourly price samples over the last seven days, oldest first.
    /// Charting only.
    pub sparkline_7d: Vec<f64>,
    pub activity_ratio: f64,
}

#[async_trait]
pub trait MarketProvider: Send + Sync {
    /// Fetches the full asset listing. Each call returns a complete,
    /// self-consistent snapshot of the market.
    async fn fetch_markets(&self) -> Result<Vec<AssetSnapshot>>;
}

/// Table ordering for the market view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Feed order, i.e. by market capitalization.
    #[default]
    MarketCap,
    /// Hottest first: by activity ratio, descending.
    Activity,
}

impl SortMode {
    pub fn toggle(self) -> Self {
        match self {
            SortMode::MarketCap => SortMode::Activity,
            SortMode::Activity => SortMode::MarketCap,
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SortMode::MarketCap => "market cap",
            SortMode::Activity => "activity",
        };
        write!(f, "{text}")
    }
}

impl FromStr for SortMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cap" | "market-cap" | "marketcap" => Ok(SortMode::MarketCap),
            "activity" | "hot" => Ok(SortMode::Activity),
            _ => Err(anyhow::anyhow!("Invalid sort mode: {}", s)),
        }
    }
}

/// Returns the assets in the requested order without touching the input.
pub fn sorted_assets(assets: &[AssetSnapshot], mode: SortMode) -> Vec<AssetSnapshot> {
    let mut sorted = assets.to_vec();
    match mode {
        SortMode::MarketCap => {
            sorted.sort_by_key(|a| a.rank.unwrap_or(u32::MAX));
        }
        SortMode::Activity => {
            sorted.sort_by(|a, b| {
                b.activity_ratio
                    .partial_cmp(&a.activity_ratio)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }
    sorted
}

/// Time window for the sparkline chart. The feed delivers hourly samples,
/// so a day is the last 24 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartRange {
    Day,
    ThreeDays,
    #[default]
    Week,
}

impl ChartRange {
    /// Slices the 7-day series down to this range. The full series is
    /// returned when it is shorter than the window.
    pub fn slice<'a>(&self, samples: &'a [f64]) -> &'a [f64] {
        let keep = match self {
            ChartRange::Day => 24,
            ChartRange::ThreeDays => 72,
            ChartRange::Week => return samples,
        };
        let start = samples.len().saturating_sub(keep);
        &samples[start..]
    }
}

impl Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ChartRange::Day => "24H",
            ChartRange::ThreeDays => "3D",
            ChartRange::Week => "7D",
        };
        write!(f, "{text}")
    }
}

impl FromStr for ChartRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "24H" | "1D" => Ok(ChartRange::Day),
            "3D" => Ok(ChartRange::ThreeDays),
            "7D" => Ok(ChartRange::Week),
            _ => Err(anyhow::anyhow!("Invalid chart range: {}", s)),
        }
    }
}
