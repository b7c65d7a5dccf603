use super::ui;
use crate::core::market::{AssetSnapshot, ChartRange, MarketProvider};
use anyhow::{Result, anyhow};
use console::style;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Fetches the listing and charts one asset's price series.
pub async fn run(provider: &dyn MarketProvider, coin_id: &str, range: ChartRange) -> Result<()> {
    let pb = ui::new_spinner("Fetching market data...");
    let assets = provider.fetch_markets().await;
    pb.finish_and_clear();

    let assets = assets?;
    let asset = assets
        .iter()
        .find(|a| a.id == coin_id)
        .ok_or_else(|| anyhow!("No asset with id '{}' in the current listing", coin_id))?;

    println!("{}", render_chart(asset, range));
    Ok(())
}

/// Renders the sliced sparkline with a one-line header and price labels.
pub fn render_chart(asset: &AssetSnapshot, range: ChartRange) -> String {
    let samples = range.slice(&asset.sparkline_7d);

    let header = format!(
        "{} {} {} {}",
        ui::style_text(&asset.name, ui::StyleType::Title),
        ui::format_usd(asset.price),
        colorize_change(asset.change_24h_pct),
        ui::style_text(&format!("[{range}]"), ui::StyleType::Subtle)
    );

    if samples.len() < 2 {
        return format!(
            "{header}\n{}",
            ui::style_text("No price history available", ui::StyleType::Subtle)
        );
    }

    let line = sparkline(samples);
    let line = if asset.change_24h_pct >= 0.0 {
        style(line).green().to_string()
    } else {
        style(line).red().to_string()
    };

    let low = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let high = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let labels = format!(
        "low {}  high {}  start {}  end {}",
        ui::format_usd(low),
        ui::format_usd(high),
        ui::format_usd(samples[0]),
        ui::format_usd(samples[samples.len() - 1]),
    );

    format!(
        "{header}\n{line}\n{}",
        ui::style_text(&labels, ui::StyleType::Subtle)
    )
}

fn colorize_change(change: f64) -> String {
    let text = ui::format_pct(change);
    if change >= 0.0 {
        style(text).green().to_string()
    } else {
        style(text).red().to_string()
    }
}

/// Maps each sample onto one of eight block characters between the series
/// minimum and maximum. A flat series renders at the middle level.
fn sparkline(samples: &[f64]) -> String {
    let low = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let high = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = high - low;

    samples
        .iter()
        .map(|sample| {
            if span <= 0.0 {
                return SPARK_LEVELS[3];
            }
            let normalized = (sample - low) / span;
            let index = ((normalized * 7.0).round() as usize).min(7);
            SPARK_LEVELS[index]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::market::test_support::snapshot;

    #[test]
    fn sparkline_spans_min_to_max() {
        let line = sparkline(&[0.0, 0.5, 1.0]);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[0], '▁');
        assert_eq!(chars[1], '▅'); // 3.5 rounds up
        assert_eq!(chars[2], '█');
    }

    #[test]
    fn flat_series_renders_mid_level() {
        let line = sparkline(&[2.0, 2.0, 2.0]);
        assert!(line.chars().all(|c| c == '▄'));
    }

    #[test]
    fn chart_slices_by_range() {
        let mut asset = snapshot("bitcoin", 50000.0, 1.5);
        asset.sparkline_7d = (0..168).map(|i| 100.0 + i as f64).collect();

        let day = render_chart(&asset, ChartRange::Day);
        let week = render_chart(&asset, ChartRange::Week);
        let day_line = day.lines().nth(1).unwrap();
        let week_line = week.lines().nth(1).unwrap();
        assert!(day_line.chars().count() < week_line.chars().count());
    }

    #[test]
    fn missing_history_renders_placeholder() {
        let asset = snapshot("bitcoin", 50000.0, 1.5);
        let rendered = render_chart(&asset, ChartRange::Week);
        assert!(rendered.contains("No price history available"));
    }
}
