//! Effective settings of one run
//!
//! Precedence: flag > environment variable (both handled by clap) >
//! config file variant section > config file defaults > built-in defaults.

use crate::cli::TargetArgs;
use crate::variant::Variant;
use appfleet_cloud::provider::MAX_URL_VALIDITY;
use appfleet_config::Overrides;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub stack: String,
    pub user: String,
    pub fleet: String,
    pub profile: String,
    pub region: String,
    pub validity: Duration,

    /// Prefix of each printed URL line
    pub label: String,
}

fn pick(flag: &Option<String>, file: &Option<String>, builtin: &str) -> String {
    flag.as_deref()
        .or(file.as_deref())
        .unwrap_or(builtin)
        .trim()
        .to_string()
}

impl Settings {
    pub fn resolve(variant: &Variant, args: &TargetArgs, file: &Overrides) -> anyhow::Result<Self> {
        let defaults = &variant.defaults;

        let settings = Self {
            stack: pick(&args.stack, &file.stack, defaults.stack),
            user: pick(&args.user, &file.user, defaults.user),
            fleet: pick(&args.fleet, &file.fleet, defaults.fleet),
            profile: pick(&args.profile, &file.profile, defaults.profile),
            region: pick(&args.region, &file.region, defaults.region),
            validity: Duration::from_secs(
                args.validity
                    .or(file.validity_secs)
                    .unwrap_or(defaults.validity_secs),
            ),
            label: file
                .label
                .clone()
                .unwrap_or_else(|| defaults.label.to_string()),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let empty: Vec<&str> = [
            ("--stack", &self.stack),
            ("--user", &self.user),
            ("--fleet", &self.fleet),
            ("--profile", &self.profile),
            ("--region", &self.region),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(flag, _)| flag)
        .collect();

        if !empty.is_empty() {
            anyhow::bail!("All flags are required (empty: {})", empty.join(", "));
        }

        if self.validity.is_zero() || self.validity > MAX_URL_VALIDITY {
            anyhow::bail!(
                "URL validity must be between 1 and {} seconds, got {}",
                MAX_URL_VALIDITY.as_secs(),
                self.validity.as_secs()
            );
        }

        Ok(())
    }
}
