//! appfleet cloud abstraction
//!
//! This crate provides the provider abstraction used by the appfleet
//! binaries to manage a desktop streaming fleet and mint per-user
//! streaming URLs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 appfleet binaries                │
//! │   (appfleet / -prewarm / -batch / -url)          │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                appfleet-cloud                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Provider Abstraction             │   │
//! │  │  trait StreamingProvider { ... }          │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │ Fleet model  │  │  Readiness   │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │   AppStream   │
//! │   provider    │
//! └───────────────┘
//! ```

pub mod error;
pub mod fleet;
pub mod provider;

// Re-exports
pub use error::{CloudError, Result};
pub use fleet::{CapacityStatus, FleetInfo, FleetState, Readiness, StreamingUrl};
pub use provider::{StreamingProvider, StreamingUrlRequest};
