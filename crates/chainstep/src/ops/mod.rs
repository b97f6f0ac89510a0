//! Deployment orchestration.
//!
//! The ops layer owns the step state machine and the plan runner: resolving
//! declared parameters, constructing requests, delegating to the deployer,
//! and serializing steps in ascending order. Policy, logging, and validation
//! live here so the public surface stays thin.

pub mod plan;
pub mod runner;
pub mod step;

pub use plan::Plan;
pub use runner::{RunReport, Runner, StepOutcome, StepReport};
pub use step::{DeploymentStep, StepExecutor, StepState};

use crate::{deployer::DeployerError, types::ContractType};
use thiserror::Error as ThisError;

///
/// OpsError
/// Error envelope shared across the ops submodules.
///

#[derive(Debug, ThisError)]
pub enum OpsError {
    /// The external deployer reported a terminal failure; the cause is
    /// carried verbatim.
    #[error("deployment failed: {0}")]
    DeploymentFailed(#[from] DeployerError),

    /// A step was handed a descriptor for a different contract.
    #[error("descriptor is for '{0}' but step declares '{1}'")]
    ContractMismatch(ContractType, ContractType),

    #[error(transparent)]
    PlanError(#[from] plan::PlanError),
}
