use crate::session::Session;
use crate::settings::Settings;
use anyhow::Context;
use appfleet_cloud::{StreamingProvider, StreamingUrl, StreamingUrlRequest};

/// Mint one URL per session, printing each as soon as it arrives.
/// The first failure aborts the run.
pub async fn handle(
    provider: &dyn StreamingProvider,
    settings: &Settings,
    sessions: &[Session],
) -> anyhow::Result<Vec<StreamingUrl>> {
    let mut minted = Vec::with_capacity(sessions.len());

    for session in sessions {
        let request = StreamingUrlRequest::new(
            &settings.stack,
            &settings.fleet,
            session.user.as_str(),
            settings.validity,
        );

        let url = provider
            .create_streaming_url(&request)
            .await
            .with_context(|| format!("failed to create streaming URL for {}", session.user))?;

        if let Some(expires_at) = url.expires_at {
            tracing::debug!("URL for {} expires at {}", session.user, expires_at);
        }
        println!("{}", session.describe(&settings.label, &url.url));
        minted.push(url);
    }

    Ok(minted)
}
