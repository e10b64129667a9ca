//! SimpleStorage Deployer Library
//!
//! Deploys a one-slot `SimpleStorage` contract to an Ethereum node, stores a
//! number in it, and reads the number back.
//!
//! # Flow
//!
//! 1. Connect to the node and derive the account address from the private key
//! 2. Fetch the pending nonce and gas price
//! 3. Sign and submit the contract-creation transaction, wait until mined
//! 4. Sign and submit `store(value)`, wait until mined
//! 5. Read the value back with `retrieve()` over `eth_call`
//!
//! # Example
//!
//! ```rust,ignore
//! use simple_storage_deployer::{Config, SimpleStorageRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let report = SimpleStorageRunner::new(config)?.run().await?;
//!     println!("{}", report.retrieved_value);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod logging;
pub mod runner;
pub mod services;
pub mod types;

pub use config::{Config, OutputFormat};
pub use error::{AppError, Result};
pub use ethereum::constants::*;
pub use runner::SimpleStorageRunner;
