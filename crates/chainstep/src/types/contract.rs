use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, str::FromStr};

///
/// ContractType
///
/// Names a compiled contract (e.g. `ModelScheduling`). The name is the key
/// into the artifact registry and the identity carried on every step.
///

#[derive(
    Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct ContractType(pub Cow<'static, str>);

impl ContractType {
    #[must_use]
    pub const fn new(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    #[must_use]
    pub const fn owned(s: String) -> Self {
        Self(Cow::Owned(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::owned(s.to_string()))
    }
}
