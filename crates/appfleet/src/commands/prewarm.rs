use anyhow::Context;
use appfleet_cloud::StreamingProvider;
use colored::Colorize;

/// Raise (or lower) desired capacity so instances are warm before a class starts
pub async fn handle(
    provider: &dyn StreamingProvider,
    fleet: &str,
    desired: i32,
) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("Setting desired capacity of '{}' to {}...", fleet, desired).cyan()
    );

    provider
        .update_capacity(fleet, desired)
        .await
        .with_context(|| format!("updating capacity of fleet '{}' failed", fleet))?;

    println!("  ✓ desired capacity is now {}", desired);
    Ok(())
}
