//! Ethereum interaction module.
//!
//! Contains the node client, wallet management, and contract bindings.

pub mod client;
pub mod constants;
pub mod contracts;
pub mod node;
pub mod wallet;

pub use client::EthereumClient;
pub use node::NodeClient;
pub use wallet::WalletManager;
