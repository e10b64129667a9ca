//! Node RPC abstraction.
//!
//! Everything the deploy flow needs from a node, behind one trait so the flow
//! can run against a live endpoint or an in-memory node in tests.

use std::time::Duration;

use alloy::{
    consensus::TxEnvelope,
    primitives::{Address, Bytes, TxHash},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use crate::{error::Result, types::MinedTransaction};

/// Minimal JSON-RPC surface of an Ethereum node.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// `eth_chainId`.
    async fn chain_id(&self) -> Result<u64>;

    /// `eth_getTransactionCount` at the `pending` block.
    async fn pending_nonce(&self, address: Address) -> Result<u64>;

    /// `eth_gasPrice`, in wei.
    async fn gas_price(&self) -> Result<u128>;

    /// `eth_sendRawTransaction` for an already signed transaction.
    async fn send_transaction(&self, tx: TxEnvelope) -> Result<TxHash>;

    /// Poll for the receipt of `tx_hash` until it is mined or `timeout` elapses.
    async fn wait_for_receipt(&self, tx_hash: TxHash, timeout: Duration)
        -> Result<MinedTransaction>;

    /// `eth_call` against the latest block.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes>;
}
