//! SimpleStorage contract bindings.
//!
//! A contract holding one `uint256`: `store(num)` overwrites it and
//! `retrieve()` returns it.

use alloy::{json_abi::JsonAbi, primitives::Bytes, sol, sol_types::SolCall};

use crate::error::{AppError, Result};

/// JSON ABI of the SimpleStorage contract.
pub const SIMPLE_STORAGE_ABI: &str = r#"[{"inputs":[],"name":"retrieve","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"},{"inputs":[{"internalType":"uint256","name":"num","type":"uint256"}],"name":"store","outputs":[],"stateMutability":"nonpayable","type":"function"}]"#;

/// Creation bytecode of the SimpleStorage contract (solc 0.8.7).
pub const SIMPLE_STORAGE_BYTECODE: &str = "608060405234801561001057600080fd5b50610150806100206000396000f3fe608060405234801561001057600080fd5b50600436106100365760003560e01c80632e64cec11461003b5780636057361d14610059575b600080fd5b610043610075565b60405161005091906100d9565b60405180910390f35b610073600480360381019061006e919061009d565b61007e565b005b60008054905090565b8060008190555050565b60008135905061009781610103565b92915050565b6000602082840312156100b3576100b26100fe565b5b60006100c184828501610088565b91505092915050565b6100d3816100f4565b82525050565b60006020820190506100ee60008301846100ca565b92915050565b6000819050919050565b600080fd5b61010c816100f4565b811461011757600080fd5b5056fea264697066735822122061dbfcf1f879e56edf094df20c09ce7cf9831da35005f49c9bc1d06b04e4798964736f6c63430008070033";

// SimpleStorage interface
sol! {
    interface ISimpleStorage {
        function retrieve() external view returns (uint256);
        function store(uint256 num) external;
    }
}

/// Interface definition plus creation bytecode of a contract.
#[derive(Debug, Clone)]
pub struct ContractDescriptor {
    /// Parsed JSON ABI.
    pub abi: JsonAbi,
    /// Creation bytecode.
    pub bytecode: Bytes,
}

impl ContractDescriptor {
    /// Parse a descriptor from a JSON ABI string and hex bytecode (0x prefix optional).
    pub fn parse(abi_json: &str, bytecode_hex: &str) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(abi_json)?;
        let bytecode = Bytes::from(alloy::hex::decode(bytecode_hex.trim())?);

        if bytecode.is_empty() {
            return Err(AppError::Abi("Contract bytecode is empty".into()));
        }

        Ok(Self { abi, bytecode })
    }

    /// The bundled SimpleStorage descriptor, checked against the typed bindings.
    pub fn simple_storage() -> Result<Self> {
        let descriptor = Self::parse(SIMPLE_STORAGE_ABI, SIMPLE_STORAGE_BYTECODE)?;
        descriptor.require_function("retrieve", ISimpleStorage::retrieveCall::SELECTOR)?;
        descriptor.require_function("store", ISimpleStorage::storeCall::SELECTOR)?;
        Ok(descriptor)
    }

    /// Fail unless the ABI declares `name` with the given selector.
    pub fn require_function(&self, name: &str, selector: [u8; 4]) -> Result<()> {
        let overloads = self
            .abi
            .function(name)
            .ok_or_else(|| AppError::Abi(format!("ABI has no function '{}'", name)))?;

        if overloads.iter().any(|f| f.selector().0 == selector) {
            Ok(())
        } else {
            Err(AppError::Abi(format!(
                "ABI function '{}' does not match selector 0x{}",
                name,
                alloy::hex::encode(selector)
            )))
        }
    }
}
