//! Implementation of the `chainstep run` command.

use crate::commands::CliError;
use chainstep::{
    artifact::ArtifactRegistry,
    config::BootstrapConfig,
    deployer::DryRunDeployer,
    ops::{Plan, Runner, StepOutcome},
};
use std::path::Path;

pub async fn run(plan: &Path, bootstrap: &Path, artifacts: &Path) -> Result<(), CliError> {
    let plan = Plan::load(plan)?;
    let config = BootstrapConfig::load(bootstrap)?;
    let registry = ArtifactRegistry::load_dir(artifacts)?;

    let deployer = DryRunDeployer::new();
    let report = Runner::new(&config, &registry, &deployer)
        .run_all(&plan)
        .await;

    for step in &report.steps {
        match &step.outcome {
            StepOutcome::Deployed(handle) => {
                println!("{:>4}  {}  {}", step.index, step.contract, handle.address);
            }
            StepOutcome::Failed(reason) => {
                println!("{:>4}  {}  FAILED: {reason}", step.index, step.contract);
            }
        }
    }

    match report.failed_step() {
        None => Ok(()),
        Some(failed) => {
            let reason = match &failed.outcome {
                StepOutcome::Failed(reason) => reason.clone(),
                StepOutcome::Deployed(_) => String::new(),
            };

            Err(CliError::StepFailed(failed.index, reason))
        }
    }
}
