use appfleet::Invocation;
use appfleet::cli::TargetArgs;
use appfleet::session::MAX_SESSIONS;
use appfleet::variant::URL_ONLY;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "appfleet-url", version)]
#[command(about = "Mint streaming URLs for an already running AppStream fleet", long_about = None)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,

    /// CSV file of names; creates one streaming URL per name
    #[arg(long, value_name = "PATH", conflicts_with = "count")]
    csv: Option<PathBuf>,

    /// Number of streaming URLs to mint
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SESSIONS))
    )]
    count: Option<u32>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let invocation = Invocation {
        target: cli.target,
        roster: cli.csv,
        count: cli.count,
        ..Default::default()
    };

    appfleet::cli::execute(&URL_ONLY, invocation).await
}
