//! Flags shared by every binary and the common entry point

use crate::variant::Variant;
use crate::Invocation;
use clap::Args;
use colored::Colorize;
use std::process::ExitCode;

/// Which fleet, stack and credentials to use
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// AppStream stack name
    #[arg(long, env = "APPFLEET_STACK")]
    pub stack: Option<String>,

    /// User name prefix of each session's user id
    #[arg(long, env = "APPFLEET_USER")]
    pub user: Option<String>,

    /// Fleet name
    #[arg(long, env = "APPFLEET_FLEET")]
    pub fleet: Option<String>,

    /// AWS profile name (from the shared AWS config)
    #[arg(long, env = "APPFLEET_PROFILE")]
    pub profile: Option<String>,

    /// AWS region
    #[arg(long, env = "APPFLEET_REGION")]
    pub region: Option<String>,

    /// How long each streaming URL stays valid, in seconds
    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..=604_800)
    )]
    pub validity: Option<u64>,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr; stdout carries the URLs
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Run one binary to completion and map the result to an exit code
pub async fn execute(variant: &Variant, invocation: Invocation) -> ExitCode {
    init_tracing(invocation.target.verbose);

    match crate::run(variant, invocation).await {
        Ok(outcome) => {
            tracing::debug!("{} finished: {:?}", variant.name, outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("{} failed: {:?}", variant.name, e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
