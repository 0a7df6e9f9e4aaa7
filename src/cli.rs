use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roi-engine", version, about = "Dealer network ROI calculator")]
pub struct Cli {
    /// Configuration file path (defaults to roi-engine.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a module selection for a network size
    Quote {
        /// Number of dealer locations
        #[arg(short, long)]
        dealers: i64,

        /// Comma-separated module ids (core is always included)
        #[arg(short, long, value_delimiter = ',', default_value = "core")]
        modules: Vec<String>,

        /// Emit the cost breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a full business case from a scenario file
    Report {
        /// Path to a scenario TOML file
        #[arg(short, long)]
        scenario: PathBuf,

        /// Emit the business case as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the module catalog
    Modules,

    /// Show the active rate card
    Tiers {
        /// Emit the rate card as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration and the configured rate card
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_quote_with_modules() {
        let args = vec![
            "roi-engine",
            "quote",
            "--dealers",
            "250",
            "--modules",
            "core,scorecard,visits",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Quote {
                dealers,
                modules,
                json,
            } => {
                assert_eq!(dealers, 250);
                assert_eq!(modules, vec!["core", "scorecard", "visits"]);
                assert!(!json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote_default_modules() {
        let args = vec!["roi-engine", "quote", "--dealers", "10"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Quote { modules, .. } => {
                assert_eq!(modules, vec!["core"]);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_report_json() {
        let args = vec![
            "roi-engine",
            "report",
            "--scenario",
            "demos/scenario.toml",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Report { scenario, json } => {
                assert_eq!(scenario, PathBuf::from("demos/scenario.toml"));
                assert!(json);
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_validate() {
        let args = vec!["roi-engine", "config", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Validate));
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_cli_requires_a_subcommand() {
        let result = Cli::try_parse_from(vec!["roi-engine"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let args = vec!["roi-engine", "modules", "--config", "custom.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
