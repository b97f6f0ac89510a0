use crate::{Error, ops::DeploymentStep};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs, path::Path};
use thiserror::Error as ThisError;

///
/// PlanError
///

#[derive(Debug, ThisError)]
pub enum PlanError {
    #[error("plan not found: {0}")]
    NotFound(String),

    #[error("cannot read plan {0}: {1}")]
    CannotRead(String, String),

    #[error("toml error: {0}")]
    CannotParseToml(String),

    #[error("plan declares no steps")]
    Empty,

    #[error("duplicate step index: {0}")]
    DuplicateIndex(u32),
}

impl From<PlanError> for Error {
    fn from(err: PlanError) -> Self {
        crate::ops::OpsError::from(err).into()
    }
}

///
/// Plan
///
/// Ordered set of deployment steps, declared in a TOML manifest as `[[step]]`
/// tables. Manifest order is irrelevant; execution order is ascending step
/// index, mirroring the numbered-migration convention the manifest replaces.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    #[serde(default, rename = "step")]
    pub steps: Vec<DeploymentStep>,
}

impl Plan {
    /// Load and validate the plan manifest at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PlanError::NotFound(path.display().to_string()).into());
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| PlanError::CannotRead(path.display().to_string(), e.to_string()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate a plan from an in-memory TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, Error> {
        let plan: Self =
            toml::from_str(raw).map_err(|e| PlanError::CannotParseToml(e.to_string()))?;

        plan.validate()?;

        Ok(plan)
    }

    fn validate(&self) -> Result<(), PlanError> {
        if self.steps.is_empty() {
            return Err(PlanError::Empty);
        }

        let mut seen = BTreeSet::new();
        for step in &self.steps {
            if !seen.insert(step.index) {
                return Err(PlanError::DuplicateIndex(step.index));
            }
        }

        Ok(())
    }

    /// Steps in execution order (ascending index).
    #[must_use]
    pub fn ordered(&self) -> Vec<&DeploymentStep> {
        let mut steps: Vec<&DeploymentStep> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.index);

        steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

///
/// TESTS
///
