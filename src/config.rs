//! Runtime configuration for the vanity address generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::crypto::is_base58;

/// How candidate key material is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GenerationMode {
    /// Draw a random 32-byte Ed25519 seed per attempt (fastest)
    #[default]
    Random,
    /// Generate a fresh 12-word mnemonic per attempt and derive the key
    /// along m/44'/501'/0'/0' (recoverable from the phrase)
    Mnemonic,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Random => write!(f, "random"),
            GenerationMode::Mnemonic => write!(f, "mnemonic"),
        }
    }
}

/// Solana Vanity Address Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Key generation mode
    #[arg(short = 'm', long, value_enum, default_value_t = GenerationMode::Random)]
    pub mode: GenerationMode,

    /// Address prefix to match (case-sensitive Base58, e.g. Sol1)
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Address suffix to match (case-sensitive Base58, e.g. AAaA)
    #[arg(short, long, default_value = "")]
    pub suffix: String,

    /// Stop after finding N addresses
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u64,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value_t = 5)]
    pub report_interval: u64,

    /// Result file path (default: solana_vanity_address_<timestamp>.txt)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration.
    ///
    /// All configuration errors are caught here, before any worker starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_base58(&self.prefix) {
            return Err(ConfigError::InvalidPattern(
                "Prefix contains invalid Base58 characters (valid: \
                 123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz)"
                    .into(),
            ));
        }

        if !is_base58(&self.suffix) {
            return Err(ConfigError::InvalidPattern(
                "Suffix contains invalid Base58 characters (valid: \
                 123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz)"
                    .into(),
            ));
        }

        if self.prefix.is_empty() && self.suffix.is_empty() {
            return Err(ConfigError::InvalidPattern(
                "Prefix and suffix cannot both be empty".into(),
            ));
        }

        if self.count == 0 {
            return Err(ConfigError::InvalidCount("Count must be at least 1".into()));
        }

        if self.workers == Some(0) {
            return Err(ConfigError::InvalidWorkers(
                "Worker count must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid count: {0}")]
    InvalidCount(String),
    #[error("Invalid workers: {0}")]
    InvalidWorkers(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config(prefix: &str, suffix: &str) -> Config {
        Config {
            mode: GenerationMode::Random,
            prefix: prefix.into(),
            suffix: suffix.into(),
            count: 1,
            workers: None,
            report_interval: 5,
            output: None,
        }
    }

    #[test]
    fn test_valid_prefix() {
        let config = make_test_config("Sol", "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_prefix_and_suffix() {
        let config = make_test_config("So", "AAaA");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_base58_prefix() {
        // 0, O, I and l are not Base58 symbols
        let config = make_test_config("S0l", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_base58_suffix() {
        let config = make_test_config("", "Ill");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_both_empty_rejected() {
        let config = make_test_config("", "");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut config = make_test_config("Sol", "");
        config.count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = make_test_config("Sol", "");
        config.workers = Some(0);
        assert!(config.validate().is_err());
    }
}
