//! Single deployment step execution.
//!
//! A step binds its declared parameters in order, builds one request, and
//! submits it once. Argument order is the safety-critical invariant: it must
//! match the target constructor signature positionally, because a reordered
//! deployment does not fail — it silently publishes a misconfigured contract.

use crate::{
    Error,
    config::BootstrapConfig,
    deployer::Deployer,
    log,
    log::Level,
    ops::OpsError,
    types::{ContractDescriptor, ContractType, DeploymentRequest, DeploymentResult, ParamName},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// DeploymentStep
///
/// Declarative description of one step: which contract to publish and which
/// bootstrap parameters feed its constructor, in positional order.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentStep {
    pub index: u32,

    pub contract: ContractType,

    #[serde(default)]
    pub params: Vec<ParamName>,
}

///
/// StepState
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum StepState {
    #[default]
    Idle,
    ParamsResolving,
    Submitting,
    Done,
    Failed,
}

impl StepState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

///
/// StepExecutor
///
/// Walks `Idle → ParamsResolving → Submitting → Done | Failed` for one step.
/// At most one deployment attempt per `run`; re-running the same step issues
/// an independent attempt (dedup is an orchestration concern, not ours).
///

#[derive(Debug, Default)]
pub struct StepExecutor {
    state: StepState,
}

impl StepExecutor {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: StepState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> StepState {
        self.state
    }

    pub async fn run(
        &mut self,
        step: &DeploymentStep,
        descriptor: &ContractDescriptor,
        config: &BootstrapConfig,
        deployer: &dyn Deployer,
    ) -> DeploymentResult {
        if descriptor.contract() != &step.contract {
            self.state = StepState::Failed;
            return Err(OpsError::ContractMismatch(
                descriptor.contract().clone(),
                step.contract.clone(),
            )
            .into());
        }

        // Phase 1: bind every declared parameter before anything is submitted
        self.state = StepState::ParamsResolving;
        let args = match config.resolve(&step.params) {
            Ok(args) => args,
            Err(err) => {
                self.state = StepState::Failed;
                log!(
                    "step",
                    Level::Error,
                    "step {}: {} aborted: {err}",
                    step.index,
                    step.contract
                );

                return Err(err);
            }
        };

        // Phase 2: submit exactly once and await the terminal outcome
        let request = DeploymentRequest::new(descriptor.clone(), args);

        self.state = StepState::Submitting;
        match deployer.deploy(&request).await {
            Ok(handle) => {
                self.state = StepState::Done;
                log!(
                    "step",
                    Level::Ok,
                    "⚡ step {}: {} deployed at {} (tx {})",
                    step.index,
                    step.contract,
                    handle.address,
                    handle.tx
                );

                Ok(handle)
            }
            Err(cause) => {
                self.state = StepState::Failed;
                let err: Error = OpsError::DeploymentFailed(cause).into();
                log!(
                    "step",
                    Level::Error,
                    "step {}: {} failed: {err}",
                    step.index,
                    step.contract
                );

                Err(err)
            }
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        artifact::parse_descriptor,
        config::ConfigError,
        deployer::MockDeployer,
        types::ParamValue,
    };

    fn model_scheduling() -> (DeploymentStep, ContractDescriptor) {
        let step = DeploymentStep {
            index: 2,
            contract: ContractType::new("ModelScheduling"),
            params: vec![ParamName::new("model"), ParamName::new("weights")],
        };
        let descriptor = parse_descriptor(
            "test",
            r#"{"contractName": "ModelScheduling", "abi": [], "bytecode": "0x6080604052"}"#,
        )
        .unwrap();

        (step, descriptor)
    }

    #[tokio::test]
    async fn binds_args_in_declared_order() {
        let (step, descriptor) = model_scheduling();
        let config =
            BootstrapConfig::from_toml("model = \"0xABC\"\nweights = \"0xDEF\"").unwrap();
        let deployer = MockDeployer::new();

        let mut executor = StepExecutor::new();
        let handle = executor
            .run(&step, &descriptor, &config, &deployer)
            .await
            .unwrap();

        assert_eq!(executor.state(), StepState::Done);
        assert_eq!(handle.contract, step.contract);

        let requests = deployer.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].1,
            vec![ParamValue::from("0xABC"), ParamValue::from("0xDEF")]
        );
    }

    #[tokio::test]
    async fn missing_param_never_reaches_the_deployer() {
        let (step, descriptor) = model_scheduling();
        let config = BootstrapConfig::from_toml("weights = \"0xDEF\"").unwrap();
        let deployer = MockDeployer::new();

        let mut executor = StepExecutor::new();
        let err = executor
            .run(&step, &descriptor, &config, &deployer)
            .await
            .unwrap_err();

        assert_eq!(executor.state(), StepState::Failed);
        assert_eq!(deployer.calls(), 0);
        assert!(matches!(
            err,
            Error::ConfigError(ConfigError::ParameterMissing(ref name)) if name.as_str() == "model"
        ));
    }

    #[tokio::test]
    async fn deployer_failure_surfaces_with_cause() {
        let (step, descriptor) = model_scheduling();
        let config =
            BootstrapConfig::from_toml("model = \"0xABC\"\nweights = \"0xDEF\"").unwrap();
        let deployer = MockDeployer::failing("out of gas");

        let mut executor = StepExecutor::new();
        let err = executor
            .run(&step, &descriptor, &config, &deployer)
            .await
            .unwrap_err();

        assert_eq!(executor.state(), StepState::Failed);
        assert_eq!(deployer.calls(), 1);
        assert!(matches!(err, Error::OpsError(OpsError::DeploymentFailed(_))));
        assert!(err.to_string().contains("out of gas"));
    }

    #[tokio::test]
    async fn rerun_issues_an_independent_attempt() {
        let (step, descriptor) = model_scheduling();
        let config =
            BootstrapConfig::from_toml("model = \"0xABC\"\nweights = \"0xDEF\"").unwrap();
        let deployer = MockDeployer::new();

        let mut executor = StepExecutor::new();
        executor
            .run(&step, &descriptor, &config, &deployer)
            .await
            .unwrap();
        executor
            .run(&step, &descriptor, &config, &deployer)
            .await
            .unwrap();

        // no dedup at this layer
        assert_eq!(deployer.calls(), 2);
    }

    #[tokio::test]
    async fn mismatched_descriptor_is_rejected() {
        let (step, _) = model_scheduling();
        let other = parse_descriptor(
            "test",
            r#"{"contractName": "Other", "abi": [], "bytecode": "0x00"}"#,
        )
        .unwrap();
        let config = BootstrapConfig::from_toml("").unwrap();
        let deployer = MockDeployer::new();

        let mut executor = StepExecutor::new();
        let err = executor
            .run(&step, &other, &config, &deployer)
            .await
            .unwrap_err();

        assert_eq!(executor.state(), StepState::Failed);
        assert_eq!(deployer.calls(), 0);
        assert!(matches!(
            err,
            Error::OpsError(OpsError::ContractMismatch(_, _))
        ));
    }
}
