use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use roi_engine::config;

use super::render;

/// Execute the config show command
///
/// Displays the effective configuration
pub fn show(config_path: Option<&Path>) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file and the configured rate card
pub fn validate(config_path: Option<&Path>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;
    let calculator = render::calculator_from_config(&cfg)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Currency Symbol: {}", cfg.display.currency_symbol);
    println!(
        "  Rate Card:       {}",
        cfg.pricing
            .rate_card
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );
    println!("  Pricing Tiers:   {}", calculator.table().tiers().len());

    info!("Configuration validation successful");
    Ok(())
}
