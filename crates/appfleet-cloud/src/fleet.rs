//! Fleet model types
//!
//! Values reported by the streaming service. They are read once per
//! invocation and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a fleet as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetState {
    Starting,
    Running,
    Stopping,
    Stopped,
    /// Any value the service reports that is not one of the above
    Other(String),
}

impl FleetState {
    /// Parse the service's wire representation (e.g. `"RUNNING"`)
    pub fn parse(value: &str) -> Self {
        match value {
            "STARTING" => FleetState::Starting,
            "RUNNING" => FleetState::Running,
            "STOPPING" => FleetState::Stopping,
            "STOPPED" => FleetState::Stopped,
            other => FleetState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FleetState::Starting => "STARTING",
            FleetState::Running => "RUNNING",
            FleetState::Stopping => "STOPPING",
            FleetState::Stopped => "STOPPED",
            FleetState::Other(s) => s,
        }
    }
}

impl fmt::Display for FleetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instance counters of a fleet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityStatus {
    /// Desired number of streaming instances
    pub desired: i32,

    /// Instances that are running
    pub running: Option<i32>,

    /// Instances with an active user session
    pub in_use: Option<i32>,

    /// Instances available for new sessions
    pub available: Option<i32>,
}

impl fmt::Display for CapacityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn count(v: Option<i32>) -> String {
            v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
        }

        write!(
            f,
            "desired={} running={} in_use={} available={}",
            self.desired,
            count(self.running),
            count(self.in_use),
            count(self.available)
        )
    }
}

/// A fleet as returned by a describe call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetInfo {
    pub name: String,
    pub state: FleetState,
    pub capacity: Option<CapacityStatus>,
}

/// What the caller has to do before streaming URLs can be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// The fleet is running, sessions can be created
    Ready,
    /// The fleet is stopped and must be started first
    NeedsStart,
    /// The fleet is transitioning; nothing can be done until it settles
    Busy(FleetState),
}

impl FleetInfo {
    pub fn new(name: impl Into<String>, state: FleetState) -> Self {
        Self {
            name: name.into(),
            state,
            capacity: None,
        }
    }

    pub fn with_capacity(mut self, capacity: CapacityStatus) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn readiness(&self) -> Readiness {
        match self.state {
            FleetState::Running => Readiness::Ready,
            FleetState::Stopped => Readiness::NeedsStart,
            ref other => Readiness::Busy(other.clone()),
        }
    }
}

/// A signed, time-limited streaming URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingUrl {
    pub url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl StreamingUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

impl fmt::Display for StreamingUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_state_parse() {
        assert_eq!(FleetState::parse("RUNNING"), FleetState::Running);
        assert_eq!(FleetState::parse("STOPPED"), FleetState::Stopped);
        assert_eq!(FleetState::parse("STARTING"), FleetState::Starting);
        assert_eq!(FleetState::parse("STOPPING"), FleetState::Stopping);
        assert_eq!(
            FleetState::parse("PENDING_DELETE"),
            FleetState::Other("PENDING_DELETE".to_string())
        );
        assert_eq!(FleetState::parse("PENDING_DELETE").to_string(), "PENDING_DELETE");
    }

    #[test]
    fn test_readiness() {
        assert_eq!(
            FleetInfo::new("f", FleetState::Running).readiness(),
            Readiness::Ready
        );
        assert_eq!(
            FleetInfo::new("f", FleetState::Stopped).readiness(),
            Readiness::NeedsStart
        );
        assert_eq!(
            FleetInfo::new("f", FleetState::Starting).readiness(),
            Readiness::Busy(FleetState::Starting)
        );
        assert_eq!(
            FleetInfo::new("f", FleetState::Stopping).readiness(),
            Readiness::Busy(FleetState::Stopping)
        );
    }

    #[test]
    fn test_capacity_display() {
        let capacity = CapacityStatus {
            desired: 4,
            running: Some(4),
            in_use: Some(1),
            available: None,
        };
        assert_eq!(
            capacity.to_string(),
            "desired=4 running=4 in_use=1 available=-"
        );
    }
}
