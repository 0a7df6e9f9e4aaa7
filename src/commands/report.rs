use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{Cell, Color};
use tracing::info;

use roi_engine::config;
use roi_engine::report::{build_business_case, BusinessCase, Scenario};

use super::render;

/// Execute the report command
///
/// Builds the full business case for a scenario file and prints it as a set
/// of summary cards
pub fn execute(config_path: Option<&Path>, scenario_path: &Path, json: bool) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let calculator = render::calculator_from_config(&cfg)?;

    let source = fs::read_to_string(scenario_path)
        .with_context(|| format!("reading scenario {}", scenario_path.display()))?;
    let scenario = Scenario::from_toml(&source)?;
    let case = build_business_case(&calculator, &scenario);
    info!(dealers = case.dealers, report = %case.id, "built business case");

    if json {
        println!("{}", serde_json::to_string_pretty(&case)?);
        return Ok(());
    }

    print_business_case(&cfg.display.currency_symbol, &case);
    Ok(())
}

fn print_business_case(symbol: &str, case: &BusinessCase) {
    println!("{}", "Business Case Summary".green().bold());
    println!(
        "  Report {} generated {}",
        case.id,
        case.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    println!("{}", "Annual Benefits".bold());
    let mut benefits = render::summary_table();
    benefits.set_header(vec!["Time Savings", "Performance Improvement", "Total Annual Benefit"]);
    benefits.add_row(vec![
        render::format_money(symbol, case.time_savings.annual_cost_savings),
        render::format_money(symbol, case.performance.annual_improvement),
        render::format_money(symbol, case.metrics.total_annual_benefit),
    ]);
    println!("{benefits}");
    println!();

    println!("{}", "Investment".bold());
    println!(
        "  {} dealers (tier {}), {} modules",
        case.dealers,
        case.tier,
        case.modules.len()
    );
    let mut investment = render::summary_table();
    investment.set_header(vec!["One-time Setup Fee", "Annual License Fee", "First Year Total"]);
    investment.add_row(vec![
        render::format_money(symbol, case.costs.setup_fee),
        render::format_money(symbol, case.costs.annual_license),
        render::format_money(symbol, case.costs.first_year_total),
    ]);
    println!("{investment}");
    println!();

    println!("{}", "ROI Analysis".bold());
    let mut analysis = render::summary_table();
    analysis.set_header(vec!["First Year ROI", "Ongoing Annual ROI", "Payback Period"]);
    analysis.add_row(vec![
        roi_cell(case.metrics.first_year_roi),
        roi_cell(case.metrics.ongoing_annual_roi),
        Cell::new(render::format_months(case.metrics.payback_period_months)),
    ]);
    println!("{analysis}");
    println!();

    println!("{}", "Summary".bold());
    println!(
        "  - Saves {:.0} hours annually across {} role(s)",
        case.time_savings.annual_hours,
        case.time_savings.roles.len()
    );
    println!(
        "  - Generates {} in additional annual revenue",
        render::format_money(symbol, case.performance.annual_improvement)
    );
    match case.metrics.first_year_roi {
        Some(roi) => println!("  - Returns {} in the first year", render::format_percent(Some(roi))),
        None => println!("  - First-year ROI is undefined for a zero-cost selection"),
    }
    match case.metrics.payback_period_months {
        Some(months) => println!("  - Pays for itself in {:.1} months", months),
        None => println!("  - Payback is undefined without an annual benefit"),
    }
    println!("  - Utilizes {} platform module(s)", case.modules.len());
}

/// ROI cell, highlighted when the figure is positive
fn roi_cell(value: Option<f64>) -> Cell {
    let text = render::format_percent(value);
    match value {
        Some(ratio) if ratio > 0.0 => Cell::new(text).fg(Color::Green),
        _ => Cell::new(text),
    }
}
