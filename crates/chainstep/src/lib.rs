//! Chainstep — contract deployment sequencing and parameter binding.
//!
//! Chainstep is the core of a migration-style deployment system: it loads a
//! bootstrap configuration, binds named parameters into ordered constructor
//! arguments, and submits exactly one deployment request per step to an
//! external [`deployer::Deployer`]. Transaction construction, signing, fees,
//! and confirmation waiting all live behind that trait; this crate owns the
//! sequencing, the binding, and the error surface.
//!
//! A deployment run is described by an [`ops::Plan`] (ordered steps), a
//! [`config::BootstrapConfig`] (named parameter values), and an
//! [`artifact::ArtifactRegistry`] (compiled contract descriptors). The
//! [`ops::Runner`] executes the plan strictly in ascending step order and
//! halts on the first failure.

pub mod artifact;
pub mod config;
pub mod deployer;
pub mod log;
pub mod ops;
pub mod types;

pub use thiserror::Error as ThisError;

use crate::{artifact::ArtifactError, config::ConfigError, ops::OpsError};

///
/// Crate Version
///

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        artifact::ArtifactRegistry,
        config::BootstrapConfig,
        deployer::Deployer,
        log,
        log::Level,
        ops::{DeploymentStep, Plan, Runner, StepExecutor, StepState},
        types::{ContractDescriptor, ContractType, DeployedContract, ParamName, ParamValue},
    };
}

///
/// Error
///
/// Top-level error envelope. Every layer defines its own `thiserror` enum and
/// folds into this one, so callers can match on the failure kind without
/// reaching into submodules.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    ArtifactError(#[from] ArtifactError),

    #[error(transparent)]
    OpsError(#[from] OpsError),
}
