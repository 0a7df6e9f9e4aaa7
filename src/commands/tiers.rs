use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use roi_engine::config;
use roi_engine::modules::ModuleId;

use super::render;

/// Execute the tiers command
///
/// Shows the active rate card, one column per tier
pub fn execute(config_path: Option<&Path>, json: bool) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let calculator = render::calculator_from_config(&cfg)?;
    let table = calculator.table();

    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }

    match &cfg.pricing.rate_card {
        Some(path) => println!("{} ({})", "Rate Card".green().bold(), path.display()),
        None => println!("{} (built-in)", "Rate Card".green().bold()),
    }
    println!("  Cells are setup / monthly, bands include their upper bound");
    println!();

    let symbol = &cfg.display.currency_symbol;
    let mut rendered = render::summary_table();
    let mut header = vec!["Module".to_string()];
    header.extend(table.tiers().iter().map(|tier| tier.label.clone()));
    rendered.set_header(header);

    for module in ModuleId::ALL {
        let mut row = vec![module.display_name().to_string()];
        for tier in table.tiers() {
            row.push(match tier.module_cost(module) {
                Some(cost) => format!(
                    "{} / {}",
                    render::format_money(symbol, cost.setup),
                    render::format_money(symbol, cost.monthly)
                ),
                None => "-".to_string(),
            });
        }
        rendered.add_row(row);
    }
    println!("{rendered}");

    Ok(())
}
