//! Chainstep operator CLI — validate and execute deployment plans.

mod commands;

use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(name = "chainstep")]
#[command(about = "Validate and execute contract deployment plans")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a plan against the dry-run deployer
    Run {
        /// Plan manifest (TOML, [[step]] tables)
        #[arg(long)]
        plan: PathBuf,

        /// Bootstrap parameter file (TOML key/value)
        #[arg(long)]
        bootstrap: PathBuf,

        /// Directory of compiled contract artifacts (*.json)
        #[arg(long)]
        artifacts: PathBuf,
    },

    /// Validate plan, bootstrap, and artifacts without deploying
    Check {
        #[arg(long)]
        plan: PathBuf,

        #[arg(long)]
        bootstrap: PathBuf,

        #[arg(long)]
        artifacts: PathBuf,
    },

    /// List deploy targets in run order
    Targets {
        #[arg(long)]
        plan: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            plan,
            bootstrap,
            artifacts,
        } => commands::run::run(&plan, &bootstrap, &artifacts).await,
        Commands::Check {
            plan,
            bootstrap,
            artifacts,
        } => commands::check::run(&plan, &bootstrap, &artifacts),
        Commands::Targets { plan } => commands::targets::run(&plan),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
