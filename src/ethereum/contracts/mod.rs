//! Smart contract bindings.

pub mod simple_storage;

pub use simple_storage::{
    ContractDescriptor, ISimpleStorage, SIMPLE_STORAGE_ABI, SIMPLE_STORAGE_BYTECODE,
};
