use crate::{
    deployer::{Deployer, DeployerError},
    types::{ContractType, DeployedContract, DeploymentRequest, ParamValue},
};
use async_trait::async_trait;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

///
/// MockDeployer
///
/// Recording stub for tests and harnesses. Counts invocations, captures every
/// request's contract and argument order, and can be configured to fail so
/// callers can assert fail-fast behavior.
///

#[derive(Debug, Default)]
pub struct MockDeployer {
    calls: AtomicUsize,
    requests: Mutex<Vec<(ContractType, Vec<ParamValue>)>>,
    fail_with: Option<String>,
}

impl MockDeployer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose every `deploy` call is rejected with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Number of `deploy` invocations observed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Captured `(contract, args)` pairs, in submission order.
    #[must_use]
    pub fn requests(&self) -> Vec<(ContractType, Vec<ParamValue>)> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl Deployer for MockDeployer {
    async fn deploy(&self, request: &DeploymentRequest) -> Result<DeployedContract, DeployerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push((request.contract().clone(), request.args().to_vec()));

        if let Some(reason) = &self.fail_with {
            return Err(DeployerError::Rejected(reason.clone()));
        }

        let n = self.calls();
        Ok(DeployedContract {
            contract: request.contract().clone(),
            address: format!("0x{n:040x}"),
            tx: format!("0x{n:064x}"),
        })
    }
}
