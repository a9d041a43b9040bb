use anyhow::Context;
use appfleet_cloud::StreamingProvider;
use colored::Colorize;

pub async fn handle(provider: &dyn StreamingProvider, fleet: &str) -> anyhow::Result<()> {
    provider
        .stop_fleet(fleet)
        .await
        .with_context(|| format!("stopping fleet '{}' failed", fleet))?;

    println!("{}", format!("Fleet '{}' stopping...", fleet).yellow());
    Ok(())
}
