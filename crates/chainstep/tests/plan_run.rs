//! End-to-end plan execution against stub deployers.

use chainstep::{
    artifact::{ArtifactRegistry, parse_descriptor},
    config::BootstrapConfig,
    deployer::{DryRunDeployer, MockDeployer},
    ops::{Plan, Runner, StepOutcome, StepState},
    types::ParamValue,
};

const MODEL_SCHEDULING: &str = r#"{
    "contractName": "ModelScheduling",
    "abi": [{"type": "constructor", "inputs": [{"name": "model"}, {"name": "weights"}]}],
    "bytecode": "0x608060405234801561001057600080fd5b50"
}"#;

const PLAN: &str = r#"
    [[step]]
    index = 2
    contract = "ModelScheduling"
    params = ["model", "weights"]
"#;

const BOOTSTRAP: &str = r#"
    model = "0xABC"
    weights = "0xDEF"
"#;

fn registry() -> ArtifactRegistry {
    let mut registry = ArtifactRegistry::new();
    registry.insert(parse_descriptor("ModelScheduling.json", MODEL_SCHEDULING).unwrap());

    registry
}

#[tokio::test]
async fn model_scheduling_deploys_with_bound_args() {
    let plan = Plan::from_toml(PLAN).unwrap();
    let config = BootstrapConfig::from_toml(BOOTSTRAP).unwrap();
    let registry = registry();
    let deployer = MockDeployer::new();

    let report = Runner::new(&config, &registry, &deployer)
        .run_all(&plan)
        .await;

    assert!(report.succeeded());
    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.steps[0].state, StepState::Done);

    // the constructor receives exactly [model, weights], in that order
    let requests = deployer.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0.as_str(), "ModelScheduling");
    assert_eq!(
        requests[0].1,
        vec![ParamValue::from("0xABC"), ParamValue::from("0xDEF")]
    );

    match &report.steps[0].outcome {
        StepOutcome::Deployed(handle) => {
            assert_eq!(handle.contract.as_str(), "ModelScheduling");
            assert!(handle.address.starts_with("0x"));
        }
        StepOutcome::Failed(reason) => panic!("step failed: {reason}"),
    }
}

#[tokio::test]
async fn missing_model_fails_without_side_effects() {
    let plan = Plan::from_toml(PLAN).unwrap();
    let config = BootstrapConfig::from_toml("weights = \"0xDEF\"").unwrap();
    let registry = registry();
    let deployer = MockDeployer::new();

    let report = Runner::new(&config, &registry, &deployer)
        .run_all(&plan)
        .await;

    assert!(!report.succeeded());
    assert_eq!(report.steps[0].state, StepState::Failed);
    assert_eq!(deployer.calls(), 0);

    let failed = report.failed_step().unwrap();
    match &failed.outcome {
        StepOutcome::Failed(reason) => assert!(reason.contains("model")),
        StepOutcome::Deployed(_) => panic!("step should have failed"),
    }
}

#[tokio::test]
async fn dry_run_rehearsal_is_deterministic() {
    let plan = Plan::from_toml(PLAN).unwrap();
    let config = BootstrapConfig::from_toml(BOOTSTRAP).unwrap();
    let registry = registry();
    let deployer = DryRunDeployer::new();
    let runner = Runner::new(&config, &registry, &deployer);

    let first = runner.run_all(&plan).await;
    let second = runner.run_all(&plan).await;

    assert!(first.succeeded() && second.succeeded());

    let address = |report: &chainstep::ops::RunReport| match &report.steps[0].outcome {
        StepOutcome::Deployed(handle) => handle.address.clone(),
        StepOutcome::Failed(reason) => panic!("step failed: {reason}"),
    };
    assert_eq!(address(&first), address(&second));
}
