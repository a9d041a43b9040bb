//! AppStream provider implementation

use crate::error::{AwsError, Result};
use appfleet_cloud::{
    CapacityStatus, CloudError, FleetInfo, FleetState, StreamingProvider, StreamingUrl,
    StreamingUrlRequest,
};
use async_trait::async_trait;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_appstream::Client;
use aws_sdk_appstream::config::Region;
use aws_sdk_appstream::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_appstream::types::{ComputeCapacity, ComputeCapacityStatus, Fleet};

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-west-2";

/// Error codes the service returns for bad or expired credentials
const AUTH_ERROR_CODES: &[&str] = &[
    "UnrecognizedClientException",
    "InvalidClientTokenId",
    "ExpiredTokenException",
    "AccessDeniedException",
    "InvalidSignatureException",
];

/// Connection options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOptions {
    /// Named profile in the shared AWS config
    pub profile: String,

    pub region: String,
}

impl ProviderOptions {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

/// AppStream 2.0 provider
pub struct AppStreamProvider {
    client: Client,
}

impl AppStreamProvider {
    /// Load the shared config for the profile and build a client
    pub async fn connect(options: &ProviderOptions) -> Result<Self> {
        if options.profile.trim().is_empty() {
            return Err(AwsError::EmptyProfile);
        }

        tracing::debug!(
            "Loading AWS config: profile={} region={}",
            options.profile,
            options.region
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .profile_name(&options.profile)
            .region(Region::new(options.region.clone()))
            .load()
            .await;

        // Resolve credentials now so a bad profile fails before any fleet call
        let credentials = sdk_config
            .credentials_provider()
            .ok_or_else(|| AwsError::NoCredentials {
                profile: options.profile.clone(),
                reason: "no credentials provider configured".to_string(),
            })?;
        credentials
            .provide_credentials()
            .await
            .map_err(|e| AwsError::NoCredentials {
                profile: options.profile.clone(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(Self::from_client(Client::new(&sdk_config)))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Translate an SDK failure into a CloudError, keeping the full error chain
fn map_sdk_error<E, R>(operation: &str, subject: &str, err: SdkError<E, R>) -> CloudError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err.code() {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => CloudError::AuthenticationFailed(format!(
            "{} failed: {}",
            operation,
            DisplayErrorContext(&err)
        )),
        Some("ResourceNotFoundException") => CloudError::FleetNotFound(subject.to_string()),
        _ => CloudError::ApiError(format!("{} failed: {}", operation, DisplayErrorContext(&err))),
    }
}

fn state_from_sdk(state: &aws_sdk_appstream::types::FleetState) -> FleetState {
    FleetState::parse(state.as_str())
}

fn capacity_from_sdk(status: &ComputeCapacityStatus) -> CapacityStatus {
    CapacityStatus {
        desired: status.desired(),
        running: status.running(),
        in_use: status.in_use(),
        available: status.available(),
    }
}

fn fleet_from_sdk(fleet: &Fleet) -> FleetInfo {
    let info = FleetInfo::new(fleet.name(), state_from_sdk(fleet.state()));
    match fleet.compute_capacity_status() {
        Some(status) => info.with_capacity(capacity_from_sdk(status)),
        None => info,
    }
}

#[async_trait]
impl StreamingProvider for AppStreamProvider {
    fn name(&self) -> &str {
        "appstream"
    }

    async fn describe_fleet(&self, fleet: &str) -> appfleet_cloud::Result<Option<FleetInfo>> {
        tracing::debug!("DescribeFleets: {}", fleet);

        let output = self
            .client
            .describe_fleets()
            .names(fleet)
            .send()
            .await
            .map_err(|e| map_sdk_error("DescribeFleets", fleet, e))?;

        Ok(output
            .fleets()
            .iter()
            .find(|f| f.name() == Some(fleet))
            .map(fleet_from_sdk))
    }

    async fn start_fleet(&self, fleet: &str) -> appfleet_cloud::Result<()> {
        tracing::info!("StartFleet: {}", fleet);

        self.client
            .start_fleet()
            .name(fleet)
            .send()
            .await
            .map_err(|e| map_sdk_error("StartFleet", fleet, e))?;

        Ok(())
    }

    async fn stop_fleet(&self, fleet: &str) -> appfleet_cloud::Result<()> {
        tracing::info!("StopFleet: {}", fleet);

        self.client
            .stop_fleet()
            .name(fleet)
            .send()
            .await
            .map_err(|e| map_sdk_error("StopFleet", fleet, e))?;

        Ok(())
    }

    async fn update_capacity(
        &self,
        fleet: &str,
        desired_instances: i32,
    ) -> appfleet_cloud::Result<()> {
        if desired_instances < 1 {
            return Err(CloudError::InvalidRequest(format!(
                "desired capacity must be at least 1, got {}",
                desired_instances
            )));
        }

        tracing::info!("UpdateFleet: {} desired_instances={}", fleet, desired_instances);

        let capacity = ComputeCapacity::builder()
            .desired_instances(desired_instances)
            .build();

        self.client
            .update_fleet()
            .name(fleet)
            .compute_capacity(capacity)
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateFleet", fleet, e))?;

        Ok(())
    }

    async fn create_streaming_url(
        &self,
        request: &StreamingUrlRequest,
    ) -> appfleet_cloud::Result<StreamingUrl> {
        let validity = request.validity_secs()?;

        tracing::debug!(
            "CreateStreamingURL: stack={} fleet={} user={} validity={}s",
            request.stack,
            request.fleet,
            request.user_id,
            validity
        );

        let output = self
            .client
            .create_streaming_url()
            .stack_name(&request.stack)
            .fleet_name(&request.fleet)
            .user_id(&request.user_id)
            .validity(validity)
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateStreamingURL", &request.fleet, e))?;

        let url = output
            .streaming_url()
            .ok_or(CloudError::MissingField("StreamingURL"))?;

        let streaming_url = StreamingUrl::new(url);
        let expires_at = output
            .expires()
            .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos()));

        Ok(match expires_at {
            Some(at) => streaming_url.with_expiry(at),
            None => streaming_url,
        })
    }
}
