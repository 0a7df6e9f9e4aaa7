use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use roi_engine::config::Config;
use roi_engine::pricing::{load_rate_card, CostCalculator, PricingTable};

/// Calculator backed by the configured rate card, or the built-in price list
pub fn calculator_from_config(cfg: &Config) -> Result<CostCalculator> {
    let table = match &cfg.pricing.rate_card {
        Some(path) => load_rate_card(path)
            .with_context(|| format!("loading rate card {}", path.display()))?,
        None => PricingTable::builtin(),
    };
    Ok(CostCalculator::new(table))
}

/// A table with the shared look of all command output
pub fn summary_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a monetary amount with thousands separators, e.g. "£56,500"
pub fn format_money(symbol: &str, amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.unsigned_abs()))
}

/// Format an optional ratio as a percentage, "N/A" when undefined
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(ratio) => format!("{:.1}%", ratio * 100.0),
        None => "N/A".to_string(),
    }
}

/// Format an optional month count, "N/A" when undefined
pub fn format_months(value: Option<f64>) -> String {
    match value {
        Some(months) => format!("{:.1} months", months),
        None => "N/A".to_string(),
    }
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1_000;
        value /= 1_000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
    }
    groups.reverse();
    groups.join(",")
}
