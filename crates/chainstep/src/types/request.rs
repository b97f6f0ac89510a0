use crate::types::{ContractDescriptor, ContractType, ParamValue};

///
/// DeploymentRequest
///
/// One fully bound deployment: a contract descriptor paired with its
/// constructor arguments in declared order. Constructed only after every
/// parameter lookup has succeeded; there is no partially bound request.
///

#[derive(Clone, Debug)]
pub struct DeploymentRequest {
    descriptor: ContractDescriptor,
    args: Vec<ParamValue>,
}

impl DeploymentRequest {
    #[must_use]
    pub const fn new(descriptor: ContractDescriptor, args: Vec<ParamValue>) -> Self {
        Self { descriptor, args }
    }

    #[must_use]
    pub const fn descriptor(&self) -> &ContractDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub const fn contract(&self) -> &ContractType {
        self.descriptor.contract()
    }

    /// Constructor arguments, positionally matching the declared parameter
    /// order of the step that built this request.
    #[must_use]
    pub fn args(&self) -> &[ParamValue] {
        &self.args
    }
}

///
/// DeployedContract
/// Handle returned by the external deployer on success.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeployedContract {
    pub contract: ContractType,
    pub address: String,
    pub tx: String,
}

/// Terminal outcome of one deployment step.
pub type DeploymentResult = Result<DeployedContract, crate::Error>;
