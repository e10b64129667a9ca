//! SimpleStorage contract client.

use std::sync::Arc;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};

use crate::{
    error::{AppError, Result},
    ethereum::{
        contracts::{ContractDescriptor, ISimpleStorage},
        NodeClient,
    },
    services::Transactor,
    types::{Deployment, MinedTransaction},
};

/// Deploys contracts and binds to deployed ones.
#[derive(Debug, Clone)]
pub struct ContractClient {
    transactor: Arc<Transactor>,
}

impl ContractClient {
    /// Create a new contract client signing with `transactor`.
    pub fn new(transactor: Arc<Transactor>) -> Self {
        Self { transactor }
    }

    /// Submit a contract-creation transaction for `descriptor` and wait for it to be mined.
    pub async fn deploy(&self, descriptor: &ContractDescriptor) -> Result<Deployment> {
        tracing::info!(
            deployer = %self.transactor.address(),
            bytecode_len = descriptor.bytecode.len(),
            "Deploying contract"
        );

        let request = TransactionRequest::default().with_deploy_code(descriptor.bytecode.clone());
        let mined = self.transactor.submit(request).await?;

        let address = mined
            .contract_address
            .ok_or(AppError::MissingContractAddress(mined.tx_hash))?;

        tracing::info!(address = %address, tx_hash = %mined.tx_hash, "Contract deployed");

        Ok(Deployment { address, tx_hash: mined.tx_hash, gas_used: mined.gas_used })
    }

    /// Bind to a SimpleStorage contract at `address`.
    ///
    /// Fails if `descriptor` does not declare `store` and `retrieve`.
    pub fn simple_storage(
        &self,
        address: Address,
        descriptor: &ContractDescriptor,
    ) -> Result<SimpleStorage> {
        descriptor.require_function("store", ISimpleStorage::storeCall::SELECTOR)?;
        descriptor.require_function("retrieve", ISimpleStorage::retrieveCall::SELECTOR)?;

        Ok(SimpleStorage { address, transactor: self.transactor.clone() })
    }
}

/// A deployed SimpleStorage contract.
#[derive(Debug, Clone)]
pub struct SimpleStorage {
    address: Address,
    transactor: Arc<Transactor>,
}

impl SimpleStorage {
    /// Write `value` to the contract and wait for the transaction to be mined.
    pub async fn store(&self, value: U256) -> Result<MinedTransaction> {
        tracing::info!(contract = %self.address, value = %value, "Storing value");

        let calldata = ISimpleStorage::storeCall { num: value }.abi_encode();
        let request = TransactionRequest::default().with_to(self.address).with_input(calldata);

        self.transactor.submit(request).await
    }

    /// Read the stored value with `eth_call`. No transaction is sent.
    pub async fn retrieve(&self) -> Result<U256> {
        let calldata = ISimpleStorage::retrieveCall {}.abi_encode();
        let request = TransactionRequest::default().with_to(self.address).with_input(calldata);

        let output = self.node().call(request).await?;
        let value = ISimpleStorage::retrieveCall::abi_decode_returns(&output)?;

        tracing::info!(contract = %self.address, value = %value, "Retrieved value");

        Ok(value)
    }

    fn node(&self) -> &Arc<dyn NodeClient> {
        self.transactor.node()
    }
}
