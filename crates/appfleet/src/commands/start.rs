use anyhow::Context;
use appfleet_cloud::{CloudError, Readiness, StreamingProvider};
use colored::Colorize;

/// Result of making sure the fleet runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Already running; URLs can be minted now
    Running,
    /// Start was requested; the fleet needs several minutes
    StartRequested,
}

pub async fn handle(provider: &dyn StreamingProvider, fleet: &str) -> anyhow::Result<Launch> {
    let info = provider
        .describe_fleet(fleet)
        .await
        .with_context(|| format!("describing fleet '{}' failed", fleet))?
        .ok_or_else(|| CloudError::FleetNotFound(fleet.to_string()))?;

    match info.readiness() {
        Readiness::Ready => {
            println!("{}", format!("✓ Fleet '{}' is running!", info.name).green().bold());
            if let Some(capacity) = info.capacity {
                println!("  {}", capacity.to_string().dimmed());
            }
            Ok(Launch::Running)
        }
        Readiness::NeedsStart => {
            println!("{}", format!("Starting fleet '{}'...", info.name).cyan());

            provider
                .start_fleet(fleet)
                .await
                .with_context(|| format!("starting fleet '{}' failed", fleet))?;

            println!(
                "{}",
                "Started fleet. This will take some time, so try again in about 10 minutes."
                    .yellow()
            );
            Ok(Launch::StartRequested)
        }
        Readiness::Busy(state) => Err(CloudError::InvalidFleetState {
            fleet: info.name,
            state: state.to_string(),
        }
        .into()),
    }
}
