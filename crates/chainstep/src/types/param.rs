use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, str::FromStr};

//
// common types
//

/// Opaque constructor argument value. The core never interprets these; they
/// pass through to the deployer exactly as the bootstrap file declares them.
pub use toml::Value as ParamValue;

///
/// ParamName
///

#[derive(
    Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct ParamName(pub Cow<'static, str>);

impl ParamName {
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

impl FromStr for ParamName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::owned(s.to_string()))
    }
}
