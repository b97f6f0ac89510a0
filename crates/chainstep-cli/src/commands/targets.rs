//! Implementation of the `chainstep targets` command.

use crate::commands::CliError;
use chainstep::ops::Plan;
use std::path::Path;

pub fn run(plan: &Path) -> Result<(), CliError> {
    let plan = Plan::load(plan)?;

    for step in plan.ordered() {
        let params: Vec<&str> = step.params.iter().map(|p| p.as_str()).collect();

        println!("{:>4}  {}  ({})", step.index, step.contract, params.join(", "));
    }

    Ok(())
}
