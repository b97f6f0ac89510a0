//! External deployer seam.
//!
//! Everything network-shaped — transaction construction, signing, gas and
//! nonce handling, confirmation waiting — lives behind [`Deployer`]. The core
//! hands over a fully bound [`DeploymentRequest`] and observes a terminal
//! outcome; retry and timeout policy belong to the implementation.

mod dry_run;
mod mock;

pub use dry_run::DryRunDeployer;
pub use mock::MockDeployer;

use crate::types::{DeployedContract, DeploymentRequest};
use async_trait::async_trait;
use thiserror::Error as ThisError;

///
/// DeployerError
///

#[derive(Debug, ThisError)]
pub enum DeployerError {
    /// The network or node accepted the request but reported failure.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The request never reached a terminal on-chain state.
    #[error("network failure: {0}")]
    Network(String),
}

///
/// Deployer
///
/// One operation: publish a single contract instance and report the terminal
/// result. Exactly one attempt per call.
///

#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, request: &DeploymentRequest) -> Result<DeployedContract, DeployerError>;
}
