//! Ethereum network constants.
//!
//! Contains transaction defaults and limits.

use std::time::Duration;

// ============================================================================
// Transaction Defaults
// ============================================================================

/// Gas limit attached to the deployment and `store` transactions.
pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

/// Value written by `store` when none is configured.
pub const DEFAULT_STORE_VALUE: u64 = 42;

/// How long to wait for a transaction to be mined.
pub const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(300);

/// Longest accepted mining wait, in seconds (one day).
pub const MAX_RECEIPT_TIMEOUT_SECS: u64 = 86_400;

/// Wei per gwei.
pub const GWEI_DECIMALS: u8 = 9;

/// Wei per ether.
pub const ETHER_DECIMALS: u8 = 18;
