use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use roi_engine::config;
use roi_engine::modules::ModuleSelection;

use super::render;

/// Execute the quote command
///
/// Prices a module selection for a network size and prints the cost breakdown
pub fn execute(config_path: Option<&Path>, dealers: i64, modules: &[String], json: bool) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let calculator = render::calculator_from_config(&cfg)?;

    let selection = ModuleSelection::parse(modules);
    let tier = calculator.resolve_tier(dealers).label.clone();
    let costs = calculator.cost_breakdown(dealers, &selection);
    info!(dealers, tier = %tier, modules = selection.len(), "computed quote");

    if json {
        println!("{}", serde_json::to_string_pretty(&costs)?);
        return Ok(());
    }

    let names: Vec<&str> = selection.iter().map(|module| module.display_name()).collect();
    println!("{}", "Quote".green().bold());
    println!("  Dealers:  {} (tier {})", dealers, tier);
    println!("  Modules:  {}", names.join(", "));
    println!();

    let symbol = &cfg.display.currency_symbol;
    let mut table = render::summary_table();
    table.set_header(vec!["One-time Setup Fee", "Annual License Fee", "First Year Total"]);
    table.add_row(vec![
        render::format_money(symbol, costs.setup_fee),
        render::format_money(symbol, costs.annual_license),
        render::format_money(symbol, costs.first_year_total),
    ]);
    println!("{table}");

    Ok(())
}
