use super::ui;
use crate::core::market::{AssetSnapshot, MarketProvider, SortMode, sorted_assets};
use crate::core::metrics::Signal;
use anyhow::Result;
use comfy_table::Cell;

/// Fetches the listing once and prints the market table.
pub async fn run(provider: &dyn MarketProvider, sort: SortMode) -> Result<()> {
    let pb = ui::new_spinner("Fetching market data...");
    let assets = provider.fetch_markets().await;
    pb.finish_and_clear();

    let assets = assets?;
    println!(
        "{} {}",
        ui::style_text("Markets", ui::StyleType::Title),
        ui::style_text(&format!("(sorted by {sort})"), ui::StyleType::Subtle)
    );
    println!("{}", render_table(&assets, sort));
    Ok(())
}

/// Renders the asset table in the given order. Shared between the
/// one-shot command and the live view.
pub fn render_table(assets: &[AssetSnapshot], sort: SortMode) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
        ui::header_cell("Price"),
        ui::header_cell("24h"),
        ui::header_cell("Volume 24h"),
        ui::header_cell("Activity"),
        ui::header_cell("Signal"),
    ]);

    for asset in sorted_assets(assets, sort) {
        let rank = asset
            .rank
            .map_or("-".to_string(), |r| format!("{r}"));
        let signal = Signal::classify(asset.change_24h_pct);
        let signal_cell = match signal {
            Signal::Discount => Cell::new(signal.to_string()).fg(comfy_table::Color::Green),
            Signal::Peak => Cell::new(signal.to_string()).fg(comfy_table::Color::Red),
            Signal::Steady => Cell::new(signal.to_string()).fg(comfy_table::Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(rank),
            Cell::new(asset.symbol.to_uppercase()),
            Cell::new(&asset.name),
            ui::value_cell(ui::format_usd(asset.price)),
            ui::change_cell(asset.change_24h_pct),
            ui::value_cell(ui::format_volume(asset.volume_24h)),
            ui::value_cell(format!("{:.1}", asset.activity_ratio)),
            signal_cell,
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::market::test_support::snapshot;

    #[test]
    fn table_lists_every_asset_with_signal() {
        let mut btc = snapshot("bitcoin", 50000.0, 6.0);
        btc.symbol = "btc".to_string();
        btc.rank = Some(1);
        let mut eth = snapshot("ethereum", 3000.0, -3.0);
        eth.symbol = "eth".to_string();
        eth.rank = Some(2);

        let rendered = render_table(&[btc, eth], SortMode::MarketCap);
        assert!(rendered.contains("BTC"));
        assert!(rendered.contains("ETH"));
        assert!(rendered.contains("Peak"));
        assert!(rendered.contains("Discount"));
        assert!(rendered.contains("$50,000.00"));
    }

    #[test]
    fn activity_sort_reorders_rows() {
        let mut slow = snapshot("slowcoin", 1.0, 0.0);
        slow.activity_ratio = 0.5;
        slow.rank = Some(1);
        let mut hot = snapshot("hotcoin", 1.0, 0.0);
        hot.activity_ratio = 42.0;
        hot.rank = Some(2);

        let rendered = render_table(&[slow, hot], SortMode::Activity);
        let hot_pos = rendered.find("hotcoin").unwrap();
        let slow_pos = rendered.find("slowcoin").unwrap();
        assert!(hot_pos < slow_pos);
    }
}
