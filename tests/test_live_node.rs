//! Integration tests against a real node (Anvil, Hardhat, or a funded testnet account).
//!
//! Run with: `cargo test --test test_live_node -- --ignored`

mod common;

use alloy::primitives::U256;
use simple_storage_deployer::{
    ethereum::{EthereumClient, NodeClient},
    SimpleStorageRunner,
};

/// Deploy, store, and retrieve on the configured node.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_deploy_store_retrieve() {
    let mut config = skip_if_no_node!();
    config.store_value = U256::from(7_777u64);

    let runner = SimpleStorageRunner::new(config).unwrap();
    let report = runner.run().await;

    assert!(report.is_ok(), "run should succeed: {:?}", report.err());

    let report = report.unwrap();
    assert_eq!(report.retrieved_value, U256::from(7_777u64));
    assert_ne!(report.deployment.address, alloy::primitives::Address::ZERO);

    println!("Run report: {}", serde_json::to_string_pretty(&report).unwrap());
}

/// The node answers the read-only queries used before signing.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_node_queries() {
    let config = skip_if_no_node!();
    let client = EthereumClient::new(&config.rpc_url).unwrap();

    let chain_id = client.chain_id().await.unwrap();
    assert!(chain_id > 0);

    // Cached after the first call
    assert_eq!(client.chain_id().await.unwrap(), chain_id);

    let gas_price = client.gas_price().await.unwrap();
    assert!(gas_price > 0);
}
