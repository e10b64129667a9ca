//! Transaction construction, signing, and submission.

use std::{sync::Arc, time::Duration};

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
};
use tokio::sync::Mutex;

use crate::{
    error::{AppError, Result},
    ethereum::{NodeClient, WalletManager},
    types::{format_gwei, MinedTransaction},
};

/// Per-account transaction options shared by every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactOpts {
    /// Nonce for the next transaction.
    pub nonce: u64,
    /// Legacy gas price in wei.
    pub gas_price: u128,
    /// Gas limit attached to every transaction.
    pub gas_limit: u64,
    /// Chain ID used for EIP-155 signing.
    pub chain_id: u64,
}

/// Signs transactions with one account and submits them to a node.
///
/// The nonce is fetched once in [`Transactor::prepare`] and then advanced
/// locally after every accepted broadcast.
pub struct Transactor {
    node: Arc<dyn NodeClient>,
    wallet: WalletManager,
    opts: Mutex<TransactOpts>,
    receipt_timeout: Duration,
}

impl Transactor {
    /// Fetch the pending nonce and gas price for `wallet` and resolve the chain ID.
    ///
    /// `chain_id` overrides the node-reported chain ID when set.
    pub async fn prepare(
        node: Arc<dyn NodeClient>,
        wallet: WalletManager,
        chain_id: Option<u64>,
        gas_limit: u64,
        receipt_timeout: Duration,
    ) -> Result<Self> {
        let chain_id = match chain_id {
            Some(id) => id,
            None => node.chain_id().await?,
        };
        let nonce = node.pending_nonce(wallet.address()).await?;
        let gas_price = node.gas_price().await?;

        tracing::info!(
            account = %wallet.address(),
            chain_id = chain_id,
            nonce = nonce,
            gas_price_gwei = %format_gwei(gas_price),
            gas_limit = gas_limit,
            "Transaction options prepared"
        );

        let opts = TransactOpts { nonce, gas_price, gas_limit, chain_id };
        Ok(Self::with_opts(node, wallet, opts, receipt_timeout))
    }

    /// Create a transactor from known options, without contacting the node.
    pub fn with_opts(
        node: Arc<dyn NodeClient>,
        wallet: WalletManager,
        opts: TransactOpts,
        receipt_timeout: Duration,
    ) -> Self {
        Self { node, wallet, opts: Mutex::new(opts), receipt_timeout }
    }

    /// Address of the signing account.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Node this transactor submits to.
    pub fn node(&self) -> &Arc<dyn NodeClient> {
        &self.node
    }

    /// Snapshot of the current options.
    pub async fn opts(&self) -> TransactOpts {
        *self.opts.lock().await
    }

    /// Sign `request`, broadcast it, and block until it is mined.
    ///
    /// Nonce, gas price, gas limit, chain ID, sender, and a zero value are
    /// filled in here; the caller supplies only the recipient and calldata.
    /// A mined transaction whose receipt reports failure is an error.
    pub async fn submit(&self, request: TransactionRequest) -> Result<MinedTransaction> {
        let tx_hash = {
            let mut opts = self.opts.lock().await;

            let envelope = request
                .with_from(self.wallet.address())
                .with_nonce(opts.nonce)
                .with_gas_price(opts.gas_price)
                .with_gas_limit(opts.gas_limit)
                .with_chain_id(opts.chain_id)
                .with_value(U256::ZERO)
                .build(self.wallet.ethereum_wallet())
                .await
                .map_err(|e| AppError::Signing(e.to_string()))?;

            let tx_hash = self.node.send_transaction(envelope).await?;
            tracing::info!(tx_hash = %tx_hash, nonce = opts.nonce, "Transaction broadcast");

            opts.nonce += 1;
            tx_hash
        };

        let mined = self.node.wait_for_receipt(tx_hash, self.receipt_timeout).await?;

        if !mined.success {
            tracing::warn!(tx_hash = %tx_hash, "Transaction reverted");
            return Err(AppError::TransactionFailed(tx_hash));
        }

        tracing::info!(
            tx_hash = %tx_hash,
            block = ?mined.block_number,
            gas_used = mined.gas_used,
            "Transaction mined"
        );

        Ok(mined)
    }
}

impl std::fmt::Debug for Transactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transactor")
            .field("wallet", &self.wallet)
            .field("receipt_timeout", &self.receipt_timeout)
            .finish()
    }
}
