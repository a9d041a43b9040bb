//! Session planning: which user ids get a streaming URL

use crate::roster::Roster;
use std::fmt;
use thiserror::Error;

const USER_ID_MIN: usize = 2;
const USER_ID_MAX: usize = 32;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("user id '{id}' must be 2 to 32 characters long")]
    InvalidLength { id: String },

    #[error("user id '{id}' contains '{ch}' (allowed: ASCII letters, digits and _+=,.@-)")]
    InvalidCharacter { id: String, ch: char },

    #[error("{requested} sessions requested, at most 1000 are allowed per run")]
    TooMany { requested: usize },
}

/// Upper bound on URLs minted by one run
pub const MAX_SESSIONS: u32 = 1000;

/// A user id accepted by the streaming service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser(String);

impl SessionUser {
    pub fn new(id: impl Into<String>) -> Result<Self, SessionError> {
        let id = id.into();

        let len = id.chars().count();
        if !(USER_ID_MIN..=USER_ID_MAX).contains(&len) {
            return Err(SessionError::InvalidLength { id });
        }

        if let Some(ch) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || "_+=,.@-".contains(*c)))
        {
            return Err(SessionError::InvalidCharacter { id, ch });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a session is reported back to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLabel {
    Index(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
    pub label: SessionLabel,
}

impl Session {
    /// Output line for a minted URL, e.g. `Slicer for Ada: https://...`
    pub fn describe(&self, prefix: &str, url: &str) -> String {
        match &self.label {
            SessionLabel::Index(i) => format!("{} #{}: {}", prefix, i, url),
            SessionLabel::Name(name) => format!("{} for {}: {}", prefix, name, url),
        }
    }
}

/// Where the list of sessions comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSource {
    Roster(Roster),
    Count(u32),
}

impl Default for SessionSource {
    fn default() -> Self {
        SessionSource::Count(1)
    }
}

/// `{user}-{name}` per roster entry, or `{user}-{i}` for `i in 0..count`
pub fn plan_sessions(user: &str, source: &SessionSource) -> Result<Vec<Session>, SessionError> {
    let requested = match source {
        SessionSource::Roster(roster) => roster.len(),
        SessionSource::Count(count) => *count as usize,
    };
    if requested > MAX_SESSIONS as usize {
        return Err(SessionError::TooMany { requested });
    }

    match source {
        SessionSource::Roster(roster) => roster
            .names()
            .iter()
            .map(|name| {
                Ok(Session {
                    user: SessionUser::new(format!("{}-{}", user, name))?,
                    label: SessionLabel::Name(name.clone()),
                })
            })
            .collect(),
        SessionSource::Count(count) => (0..*count as usize)
            .map(|i| {
                Ok(Session {
                    user: SessionUser::new(format!("{}-{}", user, i))?,
                    label: SessionLabel::Index(i),
                })
            })
            .collect(),
    }
}
