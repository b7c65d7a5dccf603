use super::ui;
use crate::core::market::MarketProvider;
use crate::core::pricing::{BreakEvenRequest, BreakEvenTarget, compute_break_even};
use anyhow::{Context, Result, anyhow};
use comfy_table::Cell;

/// Looks up the live price of one asset and prints the exit price that
/// realizes the requested net profit after entry and exit fees.
pub async fn run(
    provider: &dyn MarketProvider,
    coin_id: &str,
    investment: f64,
    target_net_profit: f64,
    fee_rate_percent: f64,
) -> Result<()> {
    let pb = ui::new_spinner("Fetching market data...");
    let assets = provider.fetch_markets().await;
    pb.finish_and_clear();

    let assets = assets?;
    let asset = assets
        .iter()
        .find(|a| a.id == coin_id)
        .ok_or_else(|| anyhow!("No asset with id '{}' in the current listing", coin_id))?;

    let request = BreakEvenRequest {
        investment,
        target_net_profit,
        fee_rate_percent,
        reference_price: asset.price,
    };
    let target =
        compute_break_even(&request).context("Could not compute a break-even target")?;

    println!(
        "{}",
        render_target(&asset.name, &request, &target)
    );
    Ok(())
}

pub fn render_target(
    asset_name: &str,
    request: &BreakEvenRequest,
    target: &BreakEvenTarget,
) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell(""), ui::header_cell(asset_name)]);
    table.add_row(vec![
        Cell::new("Current price"),
        ui::value_cell(ui::format_usd(request.reference_price)),
    ]);
    table.add_row(vec![
        Cell::new("Investment"),
        ui::value_cell(ui::format_usd(request.investment)),
    ]);
    table.add_row(vec![
        Cell::new("Target net profit"),
        ui::value_cell(ui::format_usd(request.target_net_profit)),
    ]);
    table.add_row(vec![
        Cell::new("Exchange fee"),
        ui::value_cell(format!("{:.2}% each way", request.fee_rate_percent)),
    ]);
    table.add_row(vec![
        Cell::new("Sell at"),
        Cell::new(ui::style_text(
            &ui::format_usd(target.exit_price),
            ui::StyleType::Value,
        ))
        .set_alignment(comfy_table::CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Required move"),
        ui::change_cell(target.required_move_pct),
    ]);

    format!(
        "{}\n{table}",
        ui::style_text("Profit Target", ui::StyleType::Title)
    )
}
