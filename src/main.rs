use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use roi_engine::init_tracing;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    let config = args.config.as_deref();
    match args.command {
        cli::Commands::Quote {
            dealers,
            modules,
            json,
        } => {
            commands::quote::execute(config, dealers, &modules, json)?;
        }
        cli::Commands::Report { scenario, json } => {
            commands::report::execute(config, &scenario, json)?;
        }
        cli::Commands::Modules => {
            commands::modules::execute()?;
        }
        cli::Commands::Tiers { json } => {
            commands::tiers::execute(config, json)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(config)?,
            cli::ConfigCommands::Validate => commands::config::validate(config)?,
        },
        cli::Commands::Version => {
            println!("ROI Engine v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
