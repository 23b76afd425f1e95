use serde::Deserialize;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation parameters, loadable from a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Networks to submit to
    pub chains: Vec<u64>,
    /// Transactions submitted per network
    pub transactions_per_chain: usize,
    /// Probability that a transaction confirms rather than fails
    pub confirmation_rate: f64,
    /// Median receipt latency in milliseconds
    pub median_receipt_delay_ms: f64,
    /// Spread (log-normal sigma) of the receipt latency
    pub receipt_delay_sigma: f64,
    /// Probability that a receipt request hits one transient transport error
    pub transient_failure_rate: f64,
    /// RNG seed, so runs are reproducible
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chains: vec![1, 4],
            transactions_per_chain: 20,
            confirmation_rate: 0.85,
            median_receipt_delay_ms: 40.0,
            receipt_delay_sigma: 0.5,
            transient_failure_rate: 0.1,
            seed: 42,
        }
    }
}

impl Config {
    /// Load the configuration from a TOML file, or fall back to defaults
    /// when no path is given
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.chains.is_empty() {
            return Err(ConfigError::Invalid("chains must not be empty".to_string()));
        }
        if self.chains.contains(&0) {
            return Err(ConfigError::Invalid("chain id 0 is not a valid network".to_string()));
        }
        for (name, rate) in [
            ("confirmation_rate", self.confirmation_rate),
            ("transient_failure_rate", self.transient_failure_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0 and 1, got {}",
                    name, rate
                )));
            }
        }
        if self.median_receipt_delay_ms <= 0.0 {
            return Err(ConfigError::Invalid(
                "median_receipt_delay_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
