//! In-memory provider for unit tests

use appfleet_cloud::{
    CapacityStatus, CloudError, FleetInfo, FleetState, Result, StreamingProvider, StreamingUrl,
    StreamingUrlRequest,
};
use async_trait::async_trait;
use std::sync::Mutex;

pub const FLEET: &str = "3d_Printing";

/// Reports a single fleet in a fixed state and records every call
pub struct FakeProvider {
    state: FleetState,
    failing_user: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(state: FleetState) -> Self {
        Self {
            state,
            failing_user: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_url_for(mut self, user_id: &str) -> Self {
        self.failing_user = Some(user_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl StreamingProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn describe_fleet(&self, fleet: &str) -> Result<Option<FleetInfo>> {
        self.record(format!("describe:{}", fleet));
        if fleet != FLEET {
            return Ok(None);
        }
        Ok(Some(FleetInfo::new(FLEET, self.state.clone()).with_capacity(
            CapacityStatus {
                desired: 2,
                running: Some(2),
                in_use: Some(0),
                available: Some(2),
            },
        )))
    }

    async fn start_fleet(&self, fleet: &str) -> Result<()> {
        self.record(format!("start:{}", fleet));
        Ok(())
    }

    async fn stop_fleet(&self, fleet: &str) -> Result<()> {
        self.record(format!("stop:{}", fleet));
        Ok(())
    }

    async fn update_capacity(&self, fleet: &str, desired_instances: i32) -> Result<()> {
        self.record(format!("capacity:{}={}", fleet, desired_instances));
        Ok(())
    }

    async fn create_streaming_url(&self, request: &StreamingUrlRequest) -> Result<StreamingUrl> {
        self.record(format!(
            "url:{}/{}/{}",
            request.stack, request.fleet, request.user_id
        ));
        if self.failing_user.as_deref() == Some(request.user_id.as_str()) {
            return Err(CloudError::ApiError("throttled".to_string()));
        }
        Ok(StreamingUrl::new(format!(
            "https://stream.example/{}",
            request.user_id
        )))
    }
}
