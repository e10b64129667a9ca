//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::{env, str::FromStr, time::Duration};

use alloy::primitives::U256;

use crate::{
    error::AppError,
    ethereum::constants::{
        DEFAULT_GAS_LIMIT, DEFAULT_RECEIPT_TIMEOUT, DEFAULT_STORE_VALUE, MAX_RECEIPT_TIMEOUT_SECS,
    },
    logging::DEFAULT_LOG_LEVEL,
};

/// How the run report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One plain-text line per result.
    #[default]
    Text,
    /// The whole report as a JSON object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "Invalid OUTPUT_FORMAT '{}': expected 'text' or 'json'",
                other
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Private key for the deploying account (hex string, 0x prefix optional).
    pub private_key: String,
    /// Chain ID used for signing. `None` means ask the node.
    pub chain_id: Option<u64>,
    /// Gas limit for every transaction.
    pub gas_limit: u64,
    /// Value passed to `store`.
    pub store_value: U256,
    /// How long to wait for a transaction to be mined.
    pub receipt_timeout: Duration,
    /// Output format for the run report.
    pub output_format: OutputFormat,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Create a configuration with defaults for everything but the endpoint and key.
    pub fn new(rpc_url: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            private_key: private_key.into(),
            chain_id: None,
            gas_limit: DEFAULT_GAS_LIMIT,
            store_value: U256::from(DEFAULT_STORE_VALUE),
            receipt_timeout: DEFAULT_RECEIPT_TIMEOUT,
            output_format: OutputFormat::Text,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    /// - `ETHEREUM_PRIVATE_KEY`: Private key for the deploying account (hex)
    ///
    /// Optional environment variables:
    /// - `CHAIN_ID`: Chain ID for signing (default: queried from the node)
    /// - `GAS_LIMIT`: Gas limit per transaction (default: 300000)
    /// - `STORE_VALUE`: Decimal value to store (default: 42)
    /// - `RECEIPT_TIMEOUT_SECS`: Mining wait timeout, 1 to 86400 (default: 300)
    /// - `OUTPUT_FORMAT`: `text` or `json` (default: text)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup("ETHEREUM_RPC_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Config("ETHEREUM_RPC_URL environment variable not set".into()))?;

        let private_key = lookup("ETHEREUM_PRIVATE_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("ETHEREUM_PRIVATE_KEY environment variable not set".into())
            })?;

        let mut config = Self::new(rpc_url, private_key);

        if let Some(chain_id) = lookup("CHAIN_ID") {
            config.chain_id = Some(parse_var("CHAIN_ID", &chain_id)?);
        }

        if let Some(gas_limit) = lookup("GAS_LIMIT") {
            config.gas_limit = parse_var("GAS_LIMIT", &gas_limit)?;
            if config.gas_limit == 0 {
                return Err(AppError::Config("GAS_LIMIT must be greater than zero".into()));
            }
        }

        if let Some(value) = lookup("STORE_VALUE") {
            config.store_value = parse_var("STORE_VALUE", &value)?;
        }

        if let Some(timeout) = lookup("RECEIPT_TIMEOUT_SECS") {
            let secs: u64 = parse_var("RECEIPT_TIMEOUT_SECS", &timeout)?;
            if secs == 0 || secs > MAX_RECEIPT_TIMEOUT_SECS {
                return Err(AppError::Config(format!(
                    "RECEIPT_TIMEOUT_SECS must be between 1 and {}, got {}",
                    MAX_RECEIPT_TIMEOUT_SECS, secs
                )));
            }
            config.receipt_timeout = Duration::from_secs(secs);
        }

        if let Some(format) = lookup("OUTPUT_FORMAT") {
            config.output_format = format.parse()?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", name, raw, e)))
}
