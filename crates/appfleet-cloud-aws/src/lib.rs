//! AWS AppStream 2.0 provider for appfleet
//!
//! This crate implements the StreamingProvider trait on top of the
//! AppStream API, using the shared AWS configuration (`~/.aws/config`,
//! `~/.aws/credentials`) of a named profile.
//!
//! # Example
//!
//! ```ignore
//! use appfleet_cloud::StreamingProvider;
//! use appfleet_cloud_aws::{AppStreamProvider, ProviderOptions};
//!
//! let provider = AppStreamProvider::connect(&ProviderOptions::new("personal")).await?;
//!
//! if let Some(fleet) = provider.describe_fleet("3d_Printing").await? {
//!     println!("{} is {}", fleet.name, fleet.state);
//! }
//! ```

pub mod error;
pub mod provider;

pub use error::{AwsError, Result};
pub use provider::{AppStreamProvider, DEFAULT_REGION, ProviderOptions};
