//!
//! Compiled contract artifact descriptor, providing helper methods for
//! hashing and metadata used by the registry and the deployer seam.
//!

use crate::types::ContractType;
use sha2::{Digest, Sha256};

///
/// ContractDescriptor
/// Holds a compiled contract's ABI and creation bytecode plus inspectors.
///

#[derive(Clone, Debug)]
pub struct ContractDescriptor {
    contract: ContractType,
    abi: serde_json::Value,
    bytecode: Vec<u8>,
}

impl ContractDescriptor {
    #[must_use]
    pub const fn new(contract: ContractType, abi: serde_json::Value, bytecode: Vec<u8>) -> Self {
        Self {
            contract,
            abi,
            bytecode,
        }
    }

    #[must_use]
    pub const fn contract(&self) -> &ContractType {
        &self.contract
    }

    #[must_use]
    pub const fn abi(&self) -> &serde_json::Value {
        &self.abi
    }

    #[must_use]
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    /// Sha-256 over the creation bytecode.
    #[must_use]
    pub fn module_hash(&self) -> Vec<u8> {
        Sha256::digest(&self.bytecode).to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytecode.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytecode.is_empty()
    }
}
