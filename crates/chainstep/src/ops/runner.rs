//! Plan execution.
//!
//! Steps run strictly serialized, in ascending index order, because later
//! steps may depend on artifacts (addresses) produced by earlier ones. The
//! first failure halts the run; nothing after it is attempted.

use crate::{
    artifact::ArtifactRegistry,
    config::BootstrapConfig,
    deployer::Deployer,
    log,
    log::Level,
    ops::{Plan, StepExecutor, StepState},
    types::{ContractType, DeployedContract},
};

///
/// StepOutcome
///

#[derive(Clone, Debug)]
pub enum StepOutcome {
    Deployed(DeployedContract),
    Failed(String),
}

///
/// StepReport
///

#[derive(Clone, Debug)]
pub struct StepReport {
    pub index: u32,
    pub contract: ContractType,
    pub state: StepState,
    pub outcome: StepOutcome,
}

///
/// RunReport
/// Covers only the steps that were actually attempted.
///

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    /// True when every attempted step ended `Done` and none were skipped.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.steps
            .iter()
            .all(|report| report.state == StepState::Done)
    }

    #[must_use]
    pub fn failed_step(&self) -> Option<&StepReport> {
        self.steps
            .iter()
            .find(|report| report.state == StepState::Failed)
    }
}

///
/// Runner
///
/// Borrows the run's collaborators and applies a plan one step at a time.
///

pub struct Runner<'a> {
    config: &'a BootstrapConfig,
    registry: &'a ArtifactRegistry,
    deployer: &'a dyn Deployer,
}

impl<'a> Runner<'a> {
    #[must_use]
    pub const fn new(
        config: &'a BootstrapConfig,
        registry: &'a ArtifactRegistry,
        deployer: &'a dyn Deployer,
    ) -> Self {
        Self {
            config,
            registry,
            deployer,
        }
    }

    /// Execute every pending step in ascending index order, halting on the
    /// first failure. Every step in the plan is pending on every run; dedup
    /// against already-deployed contracts belongs to the layer above.
    pub async fn run_all(&self, plan: &Plan) -> RunReport {
        let mut report = RunReport::default();

        for step in plan.ordered() {
            let descriptor = match self.registry.try_get(&step.contract) {
                Ok(descriptor) => descriptor,
                Err(err) => {
                    log!(
                        "runner",
                        Level::Error,
                        "step {}: {err}",
                        step.index
                    );
                    report.steps.push(StepReport {
                        index: step.index,
                        contract: step.contract.clone(),
                        state: StepState::Failed,
                        outcome: StepOutcome::Failed(err.to_string()),
                    });

                    break;
                }
            };

            let mut executor = StepExecutor::new();
            let result = executor
                .run(step, &descriptor, self.config, self.deployer)
                .await;

            let (state, outcome) = match result {
                Ok(handle) => (executor.state(), StepOutcome::Deployed(handle)),
                Err(err) => (executor.state(), StepOutcome::Failed(err.to_string())),
            };
            let halted = state != StepState::Done;

            report.steps.push(StepReport {
                index: step.index,
                contract: step.contract.clone(),
                state,
                outcome,
            });

            if halted {
                break;
            }
        }

        report
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{artifact::parse_descriptor, deployer::MockDeployer};

    fn registry(names: &[&str]) -> ArtifactRegistry {
        let mut registry = ArtifactRegistry::new();
        for name in names {
            let raw = format!(
                r#"{{"contractName": "{name}", "abi": [], "bytecode": "0x6080604052"}}"#
            );
            registry.insert(parse_descriptor("test", &raw).unwrap());
        }

        registry
    }

    const MANIFEST: &str = r#"
        [[step]]
        index = 4
        contract = "Marketplace"
        params = ["registry"]

        [[step]]
        index = 2
        contract = "ModelScheduling"
        params = ["model", "weights"]
    "#;

    const BOOTSTRAP: &str = r#"
        model = "0xABC"
        weights = "0xDEF"
        registry = "0x123"
    "#;

    #[tokio::test]
    async fn runs_steps_in_ascending_index_order() {
        let plan = Plan::from_toml(MANIFEST).unwrap();
        let config = BootstrapConfig::from_toml(BOOTSTRAP).unwrap();
        let registry = registry(&["ModelScheduling", "Marketplace"]);
        let deployer = MockDeployer::new();

        let report = Runner::new(&config, &registry, &deployer)
            .run_all(&plan)
            .await;

        assert!(report.succeeded());
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].index, 2);
        assert_eq!(report.steps[1].index, 4);

        let requests = deployer.requests();
        assert_eq!(requests[0].0.as_str(), "ModelScheduling");
        assert_eq!(requests[1].0.as_str(), "Marketplace");
    }

    #[tokio::test]
    async fn first_failure_halts_the_run() {
        let plan = Plan::from_toml(MANIFEST).unwrap();
        // 'registry' is present but 'model' is not: step 2 fails first
        let config = BootstrapConfig::from_toml("registry = \"0x123\"").unwrap();
        let registry = registry(&["ModelScheduling", "Marketplace"]);
        let deployer = MockDeployer::new();

        let report = Runner::new(&config, &registry, &deployer)
            .run_all(&plan)
            .await;

        assert!(!report.succeeded());
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.failed_step().unwrap().index, 2);
        assert_eq!(deployer.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_contract_halts_before_submission() {
        let plan = Plan::from_toml(MANIFEST).unwrap();
        let config = BootstrapConfig::from_toml(BOOTSTRAP).unwrap();
        let registry = registry(&["Marketplace"]); // ModelScheduling missing
        let deployer = MockDeployer::new();

        let report = Runner::new(&config, &registry, &deployer)
            .run_all(&plan)
            .await;

        assert!(!report.succeeded());
        assert_eq!(report.steps.len(), 1);
        assert_eq!(deployer.calls(), 0);
    }

    #[tokio::test]
    async fn rerunning_a_plan_redeploys_every_step() {
        let plan = Plan::from_toml(MANIFEST).unwrap();
        let config = BootstrapConfig::from_toml(BOOTSTRAP).unwrap();
        let registry = registry(&["ModelScheduling", "Marketplace"]);
        let deployer = MockDeployer::new();
        let runner = Runner::new(&config, &registry, &deployer);

        runner.run_all(&plan).await;
        runner.run_all(&plan).await;

        assert_eq!(deployer.calls(), 4);
    }
}
