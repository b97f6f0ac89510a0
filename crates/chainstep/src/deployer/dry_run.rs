use crate::{
    deployer::{Deployer, DeployerError},
    log,
    log::Level,
    types::{DeployedContract, DeploymentRequest},
};
use async_trait::async_trait;
use sha2::{Digest, Sha256};

///
/// DryRunDeployer
///
/// Rehearsal deployer: performs no network activity and fabricates a
/// deterministic address from the module hash and bound arguments, so two
/// identical requests rehearse to the same handle.
///

#[derive(Debug, Default)]
pub struct DryRunDeployer {}

impl DryRunDeployer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Deployer for DryRunDeployer {
    async fn deploy(&self, request: &DeploymentRequest) -> Result<DeployedContract, DeployerError> {
        let mut hasher = Sha256::new();
        hasher.update(request.descriptor().module_hash());
        for arg in request.args() {
            hasher.update(arg.to_string().as_bytes());
        }
        let digest = hasher.finalize();

        let address = format!("0x{}", hex::encode(&digest[..20]));
        let tx = format!("0x{}", hex::encode(digest));

        log!(
            "deploy",
            Level::Ok,
            "🚀 dry_run: {} ({} args) -> {address}",
            request.contract(),
            request.args().len()
        );

        Ok(DeployedContract {
            contract: request.contract().clone(),
            address,
            tx,
        })
    }
}

///
/// TESTS
///
