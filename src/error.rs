use std::path::PathBuf;

use thiserror::Error;

/// Engine error types
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rate card violates a tier invariant
    #[error("invalid rate card: {0}")]
    InvalidRateCard(String),

    /// Malformed TOML input (rate card or scenario)
    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to read an input file
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EngineError::InvalidRateCard("rate card has no tiers".to_string());
        assert_eq!(error.to_string(), "invalid rate card: rate card has no tiers");
    }

    #[test]
    fn test_io_error_includes_path() {
        let error = EngineError::Io {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(error.to_string().contains("missing.toml"));
    }
}
