//! Transaction and run result types.

use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

/// Outcome of a mined transaction, taken from its receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinedTransaction {
    /// Transaction hash.
    pub tx_hash: TxHash,
    /// Block the transaction was included in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// Address of the contract created by this transaction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
    /// Gas consumed.
    pub gas_used: u64,
    /// Whether execution succeeded.
    pub success: bool,
}

/// A deployed contract: where it lives and which transaction created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Contract address.
    pub address: Address,
    /// Hash of the creation transaction.
    pub tx_hash: TxHash,
    /// Gas consumed by the creation transaction.
    pub gas_used: u64,
}

/// Everything the run produced, in the order it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Account that signed every transaction.
    pub account: Address,
    /// Chain ID used for signing.
    pub chain_id: u64,
    /// Gas price in wei.
    pub gas_price: String,
    /// Gas price in gwei (human-readable).
    pub gas_price_gwei: String,
    /// Deployed contract.
    pub deployment: Deployment,
    /// Hash of the `store` transaction.
    pub store_tx_hash: TxHash,
    /// Value written by `store`.
    pub stored_value: U256,
    /// Value read back by `retrieve`.
    pub retrieved_value: U256,
    /// Total gas used by the mined transactions.
    pub gas_used: u64,
    /// Fees paid for the mined transactions, in ETH (human-readable).
    pub gas_cost_eth: String,
}

impl RunReport {
    /// Plain-text lines for terminal output.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("Contract deployed at: {}", self.deployment.address),
            format!("Deployment transaction: {}", self.deployment.tx_hash),
            format!("Stored value: {}", self.stored_value),
            format!("Store transaction: {}", self.store_tx_hash),
            format!("Retrieved value: {}", self.retrieved_value),
        ]
    }
}
