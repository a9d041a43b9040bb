//! appfleet
//!
//! Shared implementation of the appfleet binaries. Each binary parses its
//! own flags into an [`Invocation`] and hands it to [`cli::execute`] along
//! with its [`variant::Variant`].
//!
//! A run is strictly sequential:
//!
//! 1. resolve settings (flags, environment, config file, built-in defaults)
//! 2. plan sessions (roster or count)
//! 3. connect to AppStream with the named profile
//! 4. stop the fleet, or pre-warm and make sure it is running
//! 5. mint one streaming URL per session

pub mod cli;
pub mod commands;
pub mod roster;
pub mod session;
pub mod settings;
pub mod variant;

use anyhow::Context;
use appfleet_cloud::StreamingProvider;
use appfleet_cloud_aws::{AppStreamProvider, ProviderOptions};
use appfleet_config::FileConfig;
use commands::start::Launch;
use roster::Roster;
use session::{Session, SessionSource};
use settings::Settings;
use std::path::PathBuf;
use variant::Variant;

/// What the user asked a binary to do
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub target: cli::TargetArgs,
    pub stop: bool,
    pub roster: Option<PathBuf>,
    pub capacity: Option<i32>,
    pub count: Option<u32>,
}

/// Remote work derived from an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Stop,
    Launch {
        manage_fleet: bool,
        capacity: Option<i32>,
        sessions: Vec<Session>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Stop requested
    Stopping,
    /// Start requested; URLs are minted on a later run
    Starting,
    /// Number of URLs printed
    Minted(usize),
}

/// Everything that can be checked without talking to the service
pub fn prepare(
    variant: &Variant,
    invocation: &Invocation,
    file: &FileConfig,
) -> anyhow::Result<(Settings, Job)> {
    variant.check(invocation)?;

    let settings = Settings::resolve(variant, &invocation.target, &file.for_variant(variant.name))?;

    if invocation.stop {
        return Ok((settings, Job::Stop));
    }

    let source = match (&invocation.roster, invocation.count) {
        (Some(path), _) => SessionSource::Roster(Roster::load(path)?),
        (None, Some(count)) => SessionSource::Count(count),
        (None, None) => SessionSource::default(),
    };
    let sessions = session::plan_sessions(&settings.user, &source)?;

    Ok((
        settings,
        Job::Launch {
            manage_fleet: variant.manages_fleet,
            capacity: invocation.capacity,
            sessions,
        },
    ))
}

/// Carry out a prepared job against a provider
pub async fn perform(
    provider: &dyn StreamingProvider,
    settings: &Settings,
    job: &Job,
) -> anyhow::Result<Outcome> {
    tracing::debug!("Using provider {} for fleet {}", provider.name(), settings.fleet);

    let (manage_fleet, capacity, sessions) = match job {
        Job::Stop => {
            commands::stop::handle(provider, &settings.fleet).await?;
            return Ok(Outcome::Stopping);
        }
        Job::Launch {
            manage_fleet,
            capacity,
            sessions,
        } => (*manage_fleet, *capacity, sessions),
    };

    if manage_fleet {
        if let Some(desired) = capacity {
            commands::prewarm::handle(provider, &settings.fleet, desired).await?;
        }

        if let Launch::StartRequested = commands::start::handle(provider, &settings.fleet).await? {
            return Ok(Outcome::Starting);
        }
    }

    let minted = commands::urls::handle(provider, settings, sessions).await?;
    Ok(Outcome::Minted(minted.len()))
}

pub async fn run(variant: &Variant, invocation: Invocation) -> anyhow::Result<Outcome> {
    let file = FileConfig::discover().context("failed to load config file")?;
    let (settings, job) = prepare(variant, &invocation, &file)?;

    let options = ProviderOptions::new(&settings.profile).with_region(&settings.region);
    let provider = AppStreamProvider::connect(&options)
        .await
        .context("unable to load SDK config")?;

    perform(&provider, &settings, &job).await
}

#[cfg(test)]
pub(crate) mod testing;
