use appfleet::Invocation;
use appfleet::cli::TargetArgs;
use appfleet::variant::CLASSROOM;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "appfleet", version)]
#[command(about = "Start an AppStream fleet and mint a streaming URL per student", long_about = None)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,

    /// CSV file of student names; creates one streaming URL per student
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Stop the fleet instead of minting URLs
    #[arg(long, conflicts_with = "csv")]
    stop: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let invocation = Invocation {
        target: cli.target,
        stop: cli.stop,
        roster: cli.csv,
        ..Default::default()
    };

    appfleet::cli::execute(&CLASSROOM, invocation).await
}
