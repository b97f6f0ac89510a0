use crate::{
    Error,
    artifact::{ArtifactError, load_descriptor},
    log,
    log::Level,
    types::{ContractDescriptor, ContractType},
};
use std::{collections::BTreeMap, fs, path::Path};

///
/// ArtifactRegistry
///
/// In-memory map from contract type to descriptor. A plain value owned by the
/// caller; populated once per run, read-only afterwards.
///

#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    contracts: BTreeMap<ContractType, ContractDescriptor>,
}

impl ArtifactRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` artifact in `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ArtifactError::NotFound(dir.display().to_string()).into());
        }

        let entries = fs::read_dir(dir)
            .map_err(|e| ArtifactError::NotFound(format!("{}: {e}", dir.display())))?;

        let mut registry = Self::new();
        for entry in entries {
            let path = entry
                .map_err(|e| ArtifactError::NotFound(format!("{}: {e}", dir.display())))?
                .path();

            if path.extension().is_some_and(|ext| ext == "json") {
                registry.insert(load_descriptor(&path)?);
            }
        }

        Ok(registry)
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn insert(&mut self, descriptor: ContractDescriptor) {
        log!(
            "registry",
            Level::Info,
            "📄 registry.insert: {} ({:.2} KB)",
            descriptor.contract(),
            descriptor.len() as f64 / 1000.0
        );

        self.contracts.insert(descriptor.contract().clone(), descriptor);
    }

    #[must_use]
    pub fn get(&self, ty: &ContractType) -> Option<&ContractDescriptor> {
        self.contracts.get(ty)
    }

    pub fn try_get(&self, ty: &ContractType) -> Result<ContractDescriptor, Error> {
        self.get(ty)
            .cloned()
            .ok_or_else(|| ArtifactError::ContractNotFound(ty.clone()).into())
    }

    /// Registered contract types, in name order.
    pub fn types(&self) -> impl Iterator<Item = &ContractType> {
        self.contracts.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

///
/// TESTS
///
