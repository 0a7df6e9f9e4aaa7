use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbol prefixed to monetary amounts.
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Optional TOML rate card replacing the built-in price list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_card: Option<PathBuf>,
}

/// Load configuration from an explicit file, or from `roi-engine.toml` in the
/// working directory when present, merged with `ROI_ENGINE__`-prefixed
/// environment variables. Every setting has a default, so no file is needed.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let builder = match path {
        Some(path) => config::Config::builder().add_source(config::File::from(path)),
        None => config::Config::builder()
            .add_source(config::File::with_name("roi-engine").required(false)),
    };

    let settings = builder
        .add_source(config::Environment::with_prefix("ROI_ENGINE").separator("__"))
        .build()?;

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.display.currency_symbol.is_empty() {
        anyhow::bail!("display.currency_symbol cannot be empty");
    }

    if let Some(path) = &cfg.pricing.rate_card {
        if !path.exists() {
            anyhow::bail!(
                "pricing.rate_card points to a missing file: {}",
                path.display()
            );
        }
    }

    Ok(())
}
