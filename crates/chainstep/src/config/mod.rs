//! Bootstrap configuration loading.
//!
//! The bootstrap file is flat TOML key/value data supplying the named
//! constructor parameters for a deployment run (the original system fed these
//! from a checked-in `contracts` file). It is loaded once at run start,
//! never mutated, and passed by reference into the executor — there is no
//! process-global config state.

use crate::{
    Error,
    types::{ParamName, ParamValue},
};
use std::{collections::BTreeMap, fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("bootstrap config not found: {0}")]
    NotFound(String),

    #[error("cannot read bootstrap config {0}: {1}")]
    CannotRead(String, String),

    /// TOML could not be parsed into key/value data.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    #[error("parameter missing: {0}")]
    ParameterMissing(ParamName),
}

///
/// BootstrapConfig
///
/// Immutable mapping from parameter name to opaque value. Values are carried
/// verbatim; interpreting an address or a structured blob is the deployer's
/// concern.
///

#[derive(Clone, Debug, Default)]
pub struct BootstrapConfig {
    params: BTreeMap<ParamName, ParamValue>,
}

impl BootstrapConfig {
    /// Load and parse the bootstrap file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::CannotRead(path.display().to_string(), e.to_string()))?;

        Self::from_toml(&raw)
    }

    /// Parse bootstrap data from an in-memory TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, Error> {
        let table: toml::Table =
            toml::from_str(raw).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        let params = table
            .into_iter()
            .map(|(k, v)| (ParamName::owned(k), v))
            .collect();

        Ok(Self { params })
    }

    #[must_use]
    pub fn get(&self, name: &ParamName) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn try_get(&self, name: &ParamName) -> Result<&ParamValue, Error> {
        self.get(name)
            .ok_or_else(|| ConfigError::ParameterMissing(name.clone()).into())
    }

    /// Bind `names` to their values, preserving order. Fails on the first
    /// missing name; no partial binding is returned.
    pub fn resolve(&self, names: &[ParamName]) -> Result<Vec<ParamValue>, Error> {
        names
            .iter()
            .map(|name| self.try_get(name).cloned())
            .collect()
    }

    /// Declared parameter names, in key order.
    pub fn names(&self) -> impl Iterator<Item = &ParamName> {
        self.params.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

///
/// TESTS
///
