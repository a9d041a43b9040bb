//! AWS provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("AWS profile name is empty")]
    EmptyProfile,

    #[error("no usable credentials for AWS profile '{profile}': {reason}")]
    NoCredentials { profile: String, reason: String },

    #[error("Cloud error: {0}")]
    CloudError(#[from] appfleet_cloud::CloudError),
}

pub type Result<T> = std::result::Result<T, AwsError>;
