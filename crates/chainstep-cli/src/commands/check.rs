//! Implementation of the `chainstep check` command.
//!
//! Loads every input the way `run` would, then cross-checks the plan against
//! the bootstrap file and the artifact registry: each step's contract must
//! have an artifact, and each declared parameter must have a binding. A plan
//! that passes `check` cannot fail parameter resolution at run time.

use crate::commands::CliError;
use chainstep::{artifact::ArtifactRegistry, config::BootstrapConfig, ops::Plan};
use std::path::Path;

pub fn run(plan: &Path, bootstrap: &Path, artifacts: &Path) -> Result<(), CliError> {
    let plan = Plan::load(plan)?;
    let config = BootstrapConfig::load(bootstrap)?;
    let registry = ArtifactRegistry::load_dir(artifacts)?;

    let mut problems = Vec::new();

    for step in plan.ordered() {
        if registry.get(&step.contract).is_none() {
            problems.push(format!(
                "step {}: no artifact for contract '{}'",
                step.index, step.contract
            ));
        }

        for param in &step.params {
            if config.get(param).is_none() {
                problems.push(format!(
                    "step {}: parameter '{param}' has no bootstrap binding",
                    step.index
                ));
            }
        }
    }

    if problems.is_empty() {
        println!(
            "ok: {} step(s), {} artifact(s), {} bootstrap parameter(s)",
            plan.len(),
            registry.len(),
            config.len()
        );

        Ok(())
    } else {
        for problem in &problems {
            eprintln!("{problem}");
        }

        Err(CliError::CheckFailed(problems.len()))
    }
}
