use super::ui;
use crate::core::market::{AssetSnapshot, MarketProvider};
use crate::core::metrics::{Movers, split_movers};
use anyhow::Result;
use comfy_table::Cell;

/// Fetches the listing once and prints the gainers/losers panels.
pub async fn run(provider: &dyn MarketProvider) -> Result<()> {
    let pb = ui::new_spinner("Fetching market data...");
    let assets = provider.fetch_markets().await;
    pb.finish_and_clear();

    println!("{}", render_panels(&split_movers(&assets?)));
    Ok(())
}

pub fn render_panels(movers: &Movers) -> String {
    let mut output = format!(
        "{}\n{}\n",
        ui::style_text("Top Gainers (24h)", ui::StyleType::Title),
        render_panel(&movers.gainers)
    );
    output.push_str(&format!(
        "\n{}\n{}",
        ui::style_text("Top Losers (24h)", ui::StyleType::Title),
        render_panel(&movers.losers)
    ));
    output
}

fn render_panel(assets: &[AssetSnapshot]) -> String {
    if assets.is_empty() {
        return ui::style_text("No data", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Symbol"),
        ui::header_cell("Price"),
        ui::header_cell("24h"),
    ]);
    for asset in assets {
        table.add_row(vec![
            Cell::new(asset.symbol.to_uppercase()),
            ui::value_cell(ui::format_usd(asset.price)),
            ui::change_cell(asset.change_24h_pct),
        ]);
    }
    table.to_string()
}
