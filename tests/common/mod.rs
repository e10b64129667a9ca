//! Common utilities for integration tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use alloy::{
    consensus::{Transaction, TxEnvelope},
    primitives::{Address, Bytes, TxHash, TxKind, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use async_trait::async_trait;

use simple_storage_deployer::{
    ethereum::{contracts::ISimpleStorage, NodeClient},
    types::MinedTransaction,
    AppError, Config, Result,
};

/// First Hardhat/Anvil account (DO NOT use in production!)
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address derived from [`TEST_PRIVATE_KEY`].
pub const TEST_ADDRESS: Address =
    alloy::primitives::address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

pub const MOCK_CHAIN_ID: u64 = 1337;
pub const MOCK_NONCE: u64 = 7;
pub const MOCK_GAS_PRICE: u128 = 2_000_000_000;
pub const MOCK_GAS_USED: u64 = 50_000;

/// Failure modes the mock node can be told to exhibit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    /// Reject every broadcast.
    pub reject_broadcast: bool,
    /// Never produce receipts (mining times out).
    pub never_mine: bool,
    /// Mine `store` transactions with a failed status.
    pub revert_store: bool,
    /// Mine the creation transaction without a contract address.
    pub omit_contract_address: bool,
    /// Answer `eth_call` with too few bytes to decode.
    pub truncate_call_output: bool,
}

#[derive(Default)]
struct MockState {
    sent: Vec<TxEnvelope>,
    calls: Vec<TransactionRequest>,
    receipts: HashMap<TxHash, MinedTransaction>,
    storage: HashMap<Address, U256>,
    chain_id_requests: usize,
    block: u64,
}

/// In-memory node that records every payload and emulates SimpleStorage.
pub struct MockNode {
    account: Address,
    faults: Faults,
    state: Mutex<MockState>,
}

impl MockNode {
    pub fn new(faults: Faults) -> Arc<Self> {
        Arc::new(Self { account: TEST_ADDRESS, faults, state: Mutex::new(MockState::default()) })
    }

    pub fn healthy() -> Arc<Self> {
        Self::new(Faults::default())
    }

    /// Signed transactions received via `eth_sendRawTransaction`.
    pub fn sent(&self) -> Vec<TxEnvelope> {
        self.state.lock().unwrap().sent.clone()
    }

    /// Requests received via `eth_call`.
    pub fn calls(&self) -> Vec<TransactionRequest> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn chain_id_requests(&self) -> usize {
        self.state.lock().unwrap().chain_id_requests
    }

    pub fn stored_at(&self, address: Address) -> Option<U256> {
        self.state.lock().unwrap().storage.get(&address).copied()
    }
}

#[async_trait]
impl NodeClient for MockNode {
    async fn chain_id(&self) -> Result<u64> {
        self.state.lock().unwrap().chain_id_requests += 1;
        Ok(MOCK_CHAIN_ID)
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        if address != self.account {
            return Ok(0);
        }
        Ok(MOCK_NONCE + self.state.lock().unwrap().sent.len() as u64)
    }

    async fn gas_price(&self) -> Result<u128> {
        Ok(MOCK_GAS_PRICE)
    }

    async fn send_transaction(&self, tx: TxEnvelope) -> Result<TxHash> {
        if self.faults.reject_broadcast {
            return Err(AppError::Rpc("insufficient funds for gas * price + value".into()));
        }

        let tx_hash = *tx.tx_hash();
        let mut state = self.state.lock().unwrap();
        state.block += 1;

        let mut receipt = MinedTransaction {
            tx_hash,
            block_number: Some(state.block),
            contract_address: None,
            gas_used: MOCK_GAS_USED,
            success: true,
        };

        match tx.kind() {
            TxKind::Create => {
                if !self.faults.omit_contract_address {
                    let address = self.account.create(tx.nonce());
                    state.storage.insert(address, U256::ZERO);
                    receipt.contract_address = Some(address);
                }
            }
            TxKind::Call(to) => {
                let input = tx.input();
                if input.len() >= 36 && input[..4] == ISimpleStorage::storeCall::SELECTOR {
                    if self.faults.revert_store {
                        receipt.success = false;
                    } else {
                        state.storage.insert(to, U256::from_be_slice(&input[4..36]));
                    }
                }
            }
        }

        state.sent.push(tx);
        if !self.faults.never_mine {
            state.receipts.insert(tx_hash, receipt);
        }

        Ok(tx_hash)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Result<MinedTransaction> {
        self.state.lock().unwrap().receipts.get(&tx_hash).cloned().ok_or_else(|| {
            AppError::PendingTransaction(format!("Timed out after {:?} waiting for {}", timeout, tx_hash))
        })
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(tx.clone());

        let to = match tx.to {
            Some(TxKind::Call(to)) => to,
            _ => return Err(AppError::Rpc("eth_call without recipient".into())),
        };
        let input = tx.input.input().cloned().unwrap_or_default();

        if input.as_ref() != ISimpleStorage::retrieveCall::SELECTOR.as_slice() {
            return Ok(Bytes::new());
        }

        let value = state.storage.get(&to).copied().unwrap_or(U256::ZERO);
        let word = value.to_be_bytes::<32>();
        if self.faults.truncate_call_output {
            return Ok(Bytes::copy_from_slice(&word[..16]));
        }
        Ok(Bytes::copy_from_slice(&word))
    }
}

/// Configuration pointing at nothing in particular; the mock node ignores the URL.
pub fn mock_config() -> Config {
    let mut config = Config::new("http://127.0.0.1:8545", TEST_PRIVATE_KEY);
    config.receipt_timeout = Duration::from_secs(1);
    config
}

/// Helper to create a live-node configuration from environment variables.
pub fn live_config() -> Option<Config> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let rpc_url = std::env::var("ETHEREUM_RPC_URL").ok()?;
    let private_key = std::env::var("ETHEREUM_PRIVATE_KEY").ok()?;

    if rpc_url.is_empty() || private_key.is_empty() {
        return None;
    }

    Config::from_env().ok()
}

/// Skip test if no live node is configured.
#[macro_export]
macro_rules! skip_if_no_node {
    () => {
        match common::live_config() {
            Some(config) => config,
            None => {
                eprintln!("Skipping test: ETHEREUM_RPC_URL or ETHEREUM_PRIVATE_KEY not set");
                return;
            }
        }
    };
}
