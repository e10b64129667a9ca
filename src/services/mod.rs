//! Contract and transaction services.

pub mod contract;
pub mod transactor;

pub use contract::{ContractClient, SimpleStorage};
pub use transactor::{TransactOpts, Transactor};
