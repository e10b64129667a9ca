//! Deploy/store/retrieve flow.

use std::sync::Arc;

use alloy::primitives::U256;

use crate::{
    config::{Config, OutputFormat},
    error::Result,
    ethereum::{contracts::ContractDescriptor, EthereumClient, NodeClient, WalletManager},
    services::{ContractClient, Transactor},
    types::{format_ether, format_gwei, RunReport},
};

/// Runs the SimpleStorage flow against one node with one account.
pub struct SimpleStorageRunner {
    config: Config,
    node: Arc<dyn NodeClient>,
    wallet: WalletManager,
    descriptor: ContractDescriptor,
}

impl SimpleStorageRunner {
    /// Create a runner talking to `config.rpc_url`.
    ///
    /// Note: no network calls are made until [`SimpleStorageRunner::run`].
    pub fn new(config: Config) -> Result<Self> {
        let node: Arc<dyn NodeClient> = Arc::new(EthereumClient::new(&config.rpc_url)?);
        Self::with_node(config, node)
    }

    /// Create a runner on top of an existing node client.
    pub fn with_node(config: Config, node: Arc<dyn NodeClient>) -> Result<Self> {
        let wallet = WalletManager::from_private_key(&config.private_key)?;
        let descriptor = ContractDescriptor::simple_storage()?;
        Ok(Self { config, node, wallet, descriptor })
    }

    /// Deploy the contract, store the configured value, and read it back.
    ///
    /// Every step waits for the previous one; the first failure aborts the run.
    pub async fn run(&self) -> Result<RunReport> {
        let transactor = Arc::new(
            Transactor::prepare(
                self.node.clone(),
                self.wallet.clone(),
                self.config.chain_id,
                self.config.gas_limit,
                self.config.receipt_timeout,
            )
            .await?,
        );
        let opts = transactor.opts().await;
        let client = ContractClient::new(transactor);

        let deployment = client.deploy(&self.descriptor).await?;
        let contract = client.simple_storage(deployment.address, &self.descriptor)?;

        let stored = contract.store(self.config.store_value).await?;
        let retrieved_value = contract.retrieve().await?;

        if retrieved_value != self.config.store_value {
            tracing::warn!(
                stored = %self.config.store_value,
                retrieved = %retrieved_value,
                "Retrieved value differs from stored value"
            );
        }

        let gas_used = deployment.gas_used.saturating_add(stored.gas_used);
        let gas_cost = U256::from(gas_used) * U256::from(opts.gas_price);

        Ok(RunReport {
            account: self.wallet.address(),
            chain_id: opts.chain_id,
            gas_price: opts.gas_price.to_string(),
            gas_price_gwei: format_gwei(opts.gas_price),
            deployment,
            store_tx_hash: stored.tx_hash,
            stored_value: self.config.store_value,
            retrieved_value,
            gas_used,
            gas_cost_eth: format_ether(gas_cost),
        })
    }
}

/// Render a report in the configured output format.
pub fn render(report: &RunReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_lines().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
