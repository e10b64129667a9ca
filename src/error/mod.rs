//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ethereum RPC errors.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transaction could not be built or signed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// ABI encoding or decoding failed.
    #[error("ABI error: {0}")]
    Abi(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Pending transaction error (includes mining timeouts).
    #[error("Pending transaction error: {0}")]
    PendingTransaction(String),

    /// Transaction was mined but reverted.
    #[error("Transaction {0} failed on-chain")]
    TransactionFailed(TxHash),

    /// Contract creation receipt carried no contract address.
    #[error("Deployment transaction {0} produced no contract address")]
    MissingContractAddress(TxHash),
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::providers::PendingTransactionError> for AppError {
    fn from(err: alloy::providers::PendingTransactionError) -> Self {
        AppError::PendingTransaction(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<alloy::sol_types::Error> for AppError {
    fn from(err: alloy::sol_types::Error) -> Self {
        AppError::Abi(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Abi(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for AppError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
