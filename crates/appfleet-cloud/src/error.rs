//! Cloud provider error types

use thiserror::Error;

/// Cloud provider errors
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Fleet not found: {0}")]
    FleetNotFound(String),

    #[error("The fleet state is {state}, let that finish and try again...")]
    InvalidFleetState { fleet: String, state: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, CloudError>;
