//! Streaming provider trait definition

use crate::error::{CloudError, Result};
use crate::fleet::{FleetInfo, StreamingUrl};
use async_trait::async_trait;
use std::time::Duration;

/// Longest validity the service accepts for a streaming URL (7 days)
pub const MAX_URL_VALIDITY: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Streaming provider abstraction trait
///
/// Every call is a single remote operation. Implementations must not retry
/// or poll; the caller decides what to do with the result.
#[async_trait]
pub trait StreamingProvider: Send + Sync {
    /// Returns the provider name (e.g., "appstream")
    fn name(&self) -> &str;

    /// Describe a fleet by exact name. `None` if the service does not report it.
    async fn describe_fleet(&self, fleet: &str) -> Result<Option<FleetInfo>>;

    /// Request a stopped fleet to start
    async fn start_fleet(&self, fleet: &str) -> Result<()>;

    /// Request a running fleet to stop
    async fn stop_fleet(&self, fleet: &str) -> Result<()>;

    /// Set the desired number of streaming instances
    async fn update_capacity(&self, fleet: &str, desired_instances: i32) -> Result<()>;

    /// Mint a signed streaming URL for one user
    async fn create_streaming_url(&self, request: &StreamingUrlRequest) -> Result<StreamingUrl>;
}

/// Parameters for a streaming URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingUrlRequest {
    pub stack: String,
    pub fleet: String,
    pub user_id: String,
    pub validity: Duration,
}

impl StreamingUrlRequest {
    pub fn new(
        stack: impl Into<String>,
        fleet: impl Into<String>,
        user_id: impl Into<String>,
        validity: Duration,
    ) -> Self {
        Self {
            stack: stack.into(),
            fleet: fleet.into(),
            user_id: user_id.into(),
            validity,
        }
    }

    /// Validity in whole seconds, rejecting values the service would refuse
    pub fn validity_secs(&self) -> Result<i64> {
        let secs = self.validity.as_secs();
        if secs == 0 || self.validity > MAX_URL_VALIDITY {
            return Err(CloudError::InvalidRequest(format!(
                "validity must be between 1 and {} seconds, got {}",
                MAX_URL_VALIDITY.as_secs(),
                secs
            )));
        }
        Ok(secs as i64)
    }
}
