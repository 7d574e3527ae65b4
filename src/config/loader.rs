//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config.toml structure.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::jito::JitoConfig;
use crate::bundler::{BundleConfig, MAX_BUNDLE_TRANSACTIONS};

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bundle: BundleSection,
    pub jito: JitoSection,
    pub solana: SolanaSection,
    pub logging: LoggingSection,
}

/// Bundle configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct BundleSection {
    /// Maximum transactions buffered per bundle (Jito caps bundles at 5)
    pub max_transactions: usize,
    /// Validator tip in SOL, paid once per bundle
    pub tip_sol: f64,
    /// Compute-unit ceiling set on every bundled transaction
    pub compute_units: u32,
    /// Price per compute unit in micro-lamports
    pub compute_unit_price: u64,
}

/// Jito Block Engine configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct JitoSection {
    /// Block Engine endpoint URL
    pub block_engine_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Optional API token for authenticated requests
    #[serde(default)]
    pub api_token: Option<String>,
}

impl JitoSection {
    /// Get API token with environment variable fallback
    /// Checks JITO_API_TOKEN env var if config value is empty/None
    pub fn get_api_token(&self) -> Option<String> {
        if let Some(ref token) = self.api_token {
            if !token.is_empty() {
                return Some(token.clone());
            }
        }
        std::env::var("JITO_API_TOKEN").ok()
    }
}

/// Solana RPC configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaSection {
    /// RPC endpoint (use private RPC for production)
    pub rpc_url: String,
    /// Commitment level: "processed", "confirmed", "finalized"
    pub commitment: String,
    /// Wallet keypair path (NEVER commit this file!)
    pub keypair_path: String,
}

impl SolanaSection {
    /// Get RPC URL with environment variable override
    /// Checks SOLANA_RPC_URL env var first, falls back to config value
    pub fn get_rpc_url(&self) -> String {
        std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| self.rpc_url.clone())
    }

    /// Get keypair path with environment variable override
    /// Checks SOLANA_KEYPAIR_PATH env var first, falls back to config value
    pub fn get_keypair_path(&self) -> String {
        std::env::var("SOLANA_KEYPAIR_PATH").unwrap_or_else(|_| self.keypair_path.clone())
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate bundle section
        if self.bundle.max_transactions == 0
            || self.bundle.max_transactions > MAX_BUNDLE_TRANSACTIONS
        {
            return Err(ConfigError::ValidationError(format!(
                "max_transactions must be 1-{}, got {}",
                MAX_BUNDLE_TRANSACTIONS, self.bundle.max_transactions
            )));
        }

        if self.bundle.tip_sol <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tip_sol must be > 0, got {}",
                self.bundle.tip_sol
            )));
        }

        if self.bundle.compute_units == 0 || self.bundle.compute_units > 1_400_000 {
            return Err(ConfigError::ValidationError(format!(
                "compute_units must be 1-1400000, got {}",
                self.bundle.compute_units
            )));
        }

        if self.bundle.compute_unit_price == 0 {
            return Err(ConfigError::ValidationError(
                "compute_unit_price must be > 0".to_string(),
            ));
        }

        // Validate Jito
        if self.jito.block_engine_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "block_engine_url cannot be empty".to_string(),
            ));
        }

        if self.jito.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_seconds must be > 0".to_string(),
            ));
        }

        // Validate Solana
        if self.solana.rpc_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "rpc_url cannot be empty".to_string(),
            ));
        }

        if self.solana.keypair_path.is_empty() {
            return Err(ConfigError::ValidationError(
                "keypair_path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Conversion from Config to the accumulator's BundleConfig
impl From<&Config> for BundleConfig {
    fn from(config: &Config) -> Self {
        BundleConfig {
            max_transactions: config.bundle.max_transactions,
            tip_sol: config.bundle.tip_sol,
            compute_units: config.bundle.compute_units,
            compute_unit_price: config.bundle.compute_unit_price,
        }
    }
}

// Conversion from Config to the Jito client's config
impl From<&Config> for JitoConfig {
    fn from(config: &Config) -> Self {
        let mut jito = JitoConfig::default()
            .with_url(config.jito.block_engine_url.clone())
            .with_timeout(Duration::from_secs(config.jito.timeout_seconds));

        if let Some(token) = config.jito.get_api_token() {
            jito = jito.with_api_token(token);
        }

        jito
    }
}
