use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::market::{AssetSnapshot, MarketProvider};
use crate::core::metrics;

/// Read-only client for the CoinGecko markets listing. The shape of the
/// payload is an external contract with no versioning guarantee; unknown
/// fields are ignored and nullable fields are tolerated.
pub struct CoinGeckoProvider {
    base_url: String,
    vs_currency: String,
    per_page: u32,
}

impl CoinGeckoProvider {
    pub fn new(base_url: &str, vs_currency: &str, per_page: u32) -> Self {
        CoinGeckoProvider {
            base_url: base_url.to_string(),
            vs_currency: vs_currency.to_string(),
            per_page,
        }
    }
}

#[derive(Deserialize, Debug)]
struct MarketItem {
    id: String,
    symbol: String,
    name: String,
    #[serde(default)]
    image: Option<String>,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    total_volume: Option<f64>,
    market_cap: Option<f64>,
    market_cap_rank: Option<u32>,
    sparkline_in_7d: Option<SparklineIn7d>,
}

#[derive(Deserialize, Debug)]
struct SparklineIn7d {
    price: Vec<f64>,
}

impl MarketItem {
    /// Dead listings come through without a price; those are dropped.
    fn into_snapshot(self) -> Option<AssetSnapshot> {
        let price = self.current_price?;
        let volume_24h = self.total_volume.unwrap_or(0.0);
        let market_cap = self.market_cap.unwrap_or(0.0);

        Some(AssetSnapshot {
            activity_ratio: metrics::activity_ratio_or_zero(volume_24h, market_cap),
            id: self.id,
            symbol: self.symbol,
            name: self.name,
            image: self.image.unwrap_or_default(),
            price,
            change_24h_pct: self.price_change_percentage_24h.unwrap_or(0.0),
            volume_24h,
            market_cap,
            rank: self.market_cap_rank,
            sparkline_7d: self.sparkline_in_7d.map(|s| s.price).unwrap_or_default(),
        })
    }
}

#[async_trait]
impl MarketProvider for CoinGeckoProvider {
    #[instrument(name = "CoinGeckoMarketsFetch", skip(self))]
    async fn fetch_markets(&self) -> Result<Vec<AssetSnapshot>> {
        let url = format!(
            "{}/api/v3/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1&sparkline=true&price_change_percentage=24h",
            self.base_url, self.vs_currency, self.per_page
        );
        debug!("Requesting market data from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("coinradar/0.2")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from market data endpoint",
                response.status()
            ));
        }

        let text = response.text().await?;
        let items: Vec<MarketItem> = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse market listing: {}", e))?;

        if items.is_empty() {
            return Err(anyhow!("Market listing is empty"));
        }

        let assets: Vec<AssetSnapshot> =
            items.into_iter().filter_map(MarketItem::into_snapshot).collect();
        debug!("Fetched {} assets", assets.len());

        Ok(assets)
    }
}
