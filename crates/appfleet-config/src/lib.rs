pub mod error;

pub use error::*;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable that points at a config file directly
pub const CONFIG_PATH_ENV: &str = "APPFLEET_CONFIG_PATH";

const CANDIDATES: [&str; 4] = [
    "appfleet.local.yaml",
    ".appfleet.local.yaml",
    "appfleet.yaml",
    ".appfleet.yaml",
];

/// appfleet's per-user config directory
///
/// `appfleet` under the platform config directory: `~/.config/appfleet` on
/// Linux (or `$XDG_CONFIG_HOME/appfleet`), `~/Library/Application Support/appfleet`
/// on macOS.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("appfleet"))
        .ok_or(ConfigError::ConfigDirNotFound)
}

/// Locate the defaults file
///
/// Search order:
/// 1. `APPFLEET_CONFIG_PATH` (direct path)
/// 2. current directory: appfleet.local.yaml, .appfleet.local.yaml, appfleet.yaml, .appfleet.yaml
/// 3. `appfleet.yaml` in [`get_config_dir`]
///
/// Returns `None` when there is no file; built-in defaults apply then.
pub fn find_config_file() -> Result<Option<PathBuf>> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(Some(path));
        }
        tracing::warn!("{} points at a missing file: {}", CONFIG_PATH_ENV, path.display());
    }

    let current_dir = std::env::current_dir()?;
    for filename in &CANDIDATES {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    if let Ok(config_dir) = get_config_dir() {
        let global_config = config_dir.join("appfleet.yaml");
        if global_config.exists() {
            return Ok(Some(global_config));
        }
    }

    Ok(None)
}

/// Values that can be preset in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub stack: Option<String>,
    pub user: Option<String>,
    pub fleet: Option<String>,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub validity_secs: Option<u64>,
    pub label: Option<String>,
}

impl Overrides {
    /// Fill every unset value of `self` from `base`
    pub fn or(self, base: &Overrides) -> Overrides {
        Overrides {
            stack: self.stack.or_else(|| base.stack.clone()),
            user: self.user.or_else(|| base.user.clone()),
            fleet: self.fleet.or_else(|| base.fleet.clone()),
            profile: self.profile.or_else(|| base.profile.clone()),
            region: self.region.or_else(|| base.region.clone()),
            validity_secs: self.validity_secs.or(base.validity_secs),
            label: self.label.or_else(|| base.label.clone()),
        }
    }
}

/// Contents of `appfleet.yaml`
///
/// ```yaml
/// defaults:
///   profile: classroom
///   region: us-west-2
/// variants:
///   appfleet-prewarm:
///     fleet: 3d_Printing_Large
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: Overrides,

    /// Sections keyed by binary name
    #[serde(default)]
    pub variants: BTreeMap<String, Overrides>,
}

impl FileConfig {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        // An empty file is a valid "no overrides" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(path, &content)?;
        tracing::debug!("Loaded config file: {}", path.display());
        Ok(config)
    }

    /// Find and load the config file; an absent file yields empty overrides
    pub fn discover() -> Result<Self> {
        match find_config_file()? {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides for one binary: its section layered over `defaults`
    pub fn for_variant(&self, name: &str) -> Overrides {
        match self.variants.get(name) {
            Some(section) => section.clone().or(&self.defaults),
            None => self.defaults.clone(),
        }
    }
}
