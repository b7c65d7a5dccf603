use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Creates a cell for displaying percentage change with color coding.
pub fn change_cell(change: f64) -> Cell {
    let text = format_pct(change);
    if change >= 0.0 {
        Cell::new(text)
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right)
    } else {
        Cell::new(text)
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right)
    }
}

/// Right-aligned plain cell.
pub fn value_cell(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).set_alignment(CellAlignment::Right)
}

/// Creates a new `indicatif::ProgressBar` in spinner mode for fetches.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Formats a price in the quote currency: grouped thousands, two decimals
/// for prices at or above one unit, four below it.
pub fn format_usd(value: f64) -> String {
    let decimals = if value.abs() >= 1.0 { 2 } else { 4 };
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, ""));

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${sign}{grouped}.{frac_part}")
}

/// Signed percentage with two decimals, e.g. `+2.50%`.
pub fn format_pct(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Humanizes large dollar volumes: `$1.2B`, `$35.0M`, else the raw value.
pub fn format_volume(value: f64) -> String {
    if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else {
        format!("${value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(50137.14), "$50,137.14");
        assert_eq!(format_usd(1234567.0), "$1,234,567.00");
        assert_eq!(format_usd(999.5), "$999.50");
    }

    #[test]
    fn usd_formatting_uses_four_decimals_below_one() {
        assert_eq!(format_usd(0.1234), "$0.1234");
        assert_eq!(format_usd(0.00009), "$0.0001");
    }

    #[test]
    fn usd_formatting_handles_negatives() {
        assert_eq!(format_usd(-1234.5), "$-1,234.50");
    }

    #[test]
    fn pct_formatting_is_signed() {
        assert_eq!(format_pct(2.5), "+2.50%");
        assert_eq!(format_pct(-1.234), "-1.23%");
        assert_eq!(format_pct(0.0), "0.00%");
    }

    #[test]
    fn volume_formatting_humanizes() {
        assert_eq!(format_volume(30_000_000_000.0), "$30.0B");
        assert_eq!(format_volume(1_250_000_000.0), "$1.2B");
        assert_eq!(format_volume(35_000_000.0), "$35.0M");
        assert_eq!(format_volume(999_999.0), "$999999");
    }
}
