use appfleet::Invocation;
use appfleet::cli::TargetArgs;
use appfleet::session::MAX_SESSIONS;
use appfleet::variant::PREWARM;
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "appfleet-prewarm", version)]
#[command(about = "Pre-warm AppStream fleet capacity, start it and mint streaming URLs", long_about = None)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,

    /// Desired number of streaming instances to set before starting
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(i32).range(1..))]
    capacity: Option<i32>,

    /// Number of streaming URLs to mint
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SESSIONS))
    )]
    count: Option<u32>,

    /// Stop the fleet instead of minting URLs
    #[arg(long, conflicts_with_all = ["capacity", "count"])]
    stop: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let invocation = Invocation {
        target: cli.target,
        stop: cli.stop,
        capacity: cli.capacity,
        count: cli.count,
        ..Default::default()
    };

    appfleet::cli::execute(&PREWARM, invocation).await
}
