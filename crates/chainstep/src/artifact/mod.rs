//! Compiled contract artifacts.
//!
//! Artifacts are JSON files emitted by the contract build toolchain, one per
//! contract (`<Name>.json` with `contractName`, `abi`, and a hex `bytecode`
//! field). This module parses them into [`ContractDescriptor`]s and serves
//! them through the [`ArtifactRegistry`].

mod registry;

pub use registry::ArtifactRegistry;

use crate::{
    Error,
    types::{ContractDescriptor, ContractType},
};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ArtifactError
///

#[derive(Debug, ThisError)]
pub enum ArtifactError {
    #[error("artifact not found: {0}")]
    NotFound(String),

    #[error("artifact malformed: {0}: {1}")]
    Malformed(String, String),

    #[error("contract '{0}' not found in registry")]
    ContractNotFound(ContractType),
}

///
/// RawArtifact
/// On-disk artifact shape; only the fields the core needs are modeled.
///

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,

    #[serde(default)]
    abi: serde_json::Value,

    bytecode: String,
}

/// Load one artifact file into a descriptor.
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<ContractDescriptor, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.display().to_string()).into());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| ArtifactError::Malformed(path.display().to_string(), e.to_string()))?;

    parse_descriptor(&path.display().to_string(), &raw)
}

/// Parse an artifact from an in-memory JSON string.
pub fn parse_descriptor(source: &str, raw: &str) -> Result<ContractDescriptor, Error> {
    let artifact: RawArtifact = serde_json::from_str(raw)
        .map_err(|e| ArtifactError::Malformed(source.to_string(), e.to_string()))?;

    let bytecode = decode_bytecode(source, &artifact.bytecode)?;

    Ok(ContractDescriptor::new(
        ContractType::owned(artifact.contract_name),
        artifact.abi,
        bytecode,
    ))
}

fn decode_bytecode(source: &str, raw: &str) -> Result<Vec<u8>, Error> {
    let stripped = raw.strip_prefix("0x").unwrap_or(raw);

    let bytes = hex::decode(stripped)
        .map_err(|e| ArtifactError::Malformed(source.to_string(), format!("bytecode: {e}")))?;

    if bytes.is_empty() {
        return Err(
            ArtifactError::Malformed(source.to_string(), "bytecode is empty".to_string()).into(),
        );
    }

    Ok(bytes)
}

///
/// TESTS
///
