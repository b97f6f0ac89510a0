pub mod check;
pub mod run;
pub mod targets;

use thiserror::Error;

///
/// CliError
///

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Chainstep(#[from] chainstep::Error),

    #[error("step {0} failed: {1}")]
    StepFailed(u32, String),

    #[error("check found {0} problem(s)")]
    CheckFailed(usize),
}
