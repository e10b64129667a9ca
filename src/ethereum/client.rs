//! Ethereum RPC client.

use std::{sync::Arc, time::Duration};

use alloy::{
    consensus::TxEnvelope,
    network::{Ethereum, ReceiptResponse},
    primitives::{Address, Bytes, TxHash},
    providers::{PendingTransactionBuilder, Provider, ProviderBuilder, RootProvider},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::{
    error::{AppError, Result},
    ethereum::NodeClient,
    types::MinedTransaction,
};

/// Type alias for the HTTP provider.
type HttpProvider = RootProvider<Ethereum>;

/// Ethereum RPC client wrapper with lazy initialization.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// RPC URL for logging.
    rpc_url: String,
    /// Lazily initialized chain ID.
    chain_id: Arc<OnceCell<u64>>,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first operation is performed.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        #[allow(deprecated)]
        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!(rpc_url = %rpc_url, "Ethereum client created (lazy initialization)");

        Ok(Self {
            provider: Arc::new(provider),
            rpc_url: rpc_url.to_string(),
            chain_id: Arc::new(OnceCell::new()),
        })
    }

    /// Get the endpoint this client talks to.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl NodeClient for EthereumClient {
    async fn chain_id(&self) -> Result<u64> {
        self.chain_id
            .get_or_try_init(|| async {
                let chain_id = self.provider.get_chain_id().await?;
                tracing::info!(chain_id = chain_id, rpc_url = %self.rpc_url, "Connected to Ethereum node");
                Ok(chain_id)
            })
            .await
            .copied()
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        let nonce = self.provider.get_transaction_count(address).pending().await?;
        Ok(nonce)
    }

    async fn gas_price(&self) -> Result<u128> {
        let gas_price = self.provider.get_gas_price().await?;
        Ok(gas_price)
    }

    async fn send_transaction(&self, tx: TxEnvelope) -> Result<TxHash> {
        let pending = self.provider.send_tx_envelope(tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Result<MinedTransaction> {
        let receipt = PendingTransactionBuilder::new((*self.provider).clone(), tx_hash)
            .with_timeout(Some(timeout))
            .get_receipt()
            .await?;

        Ok(MinedTransaction {
            tx_hash: receipt.transaction_hash(),
            block_number: receipt.block_number(),
            contract_address: receipt.contract_address(),
            gas_used: receipt.gas_used(),
            success: receipt.status(),
        })
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes> {
        let result = self.provider.call(tx).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_is_lazy() {
        // Nothing listens here; creation must still succeed.
        let client = EthereumClient::new("http://127.0.0.1:1").unwrap();
        assert_eq!(client.rpc_url(), "http://127.0.0.1:1");
    }

    #[test]
    fn test_invalid_rpc_url() {
        match EthereumClient::new("not a url") {
            Err(AppError::Config(msg)) => assert!(msg.contains("Invalid RPC URL")),
            Err(other) => panic!("Expected Config error, got {:?}", other),
            Ok(_) => panic!("Expected an error"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_node_is_transport_error() {
        let client = EthereumClient::new("http://127.0.0.1:1").unwrap();
        let result = client.gas_price().await;
        assert!(matches!(result, Err(AppError::Transport(_))));
    }
}
