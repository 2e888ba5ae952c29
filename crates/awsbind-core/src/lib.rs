//! Regions, endpoint resolution, and client configuration shared by the
//! awsbind service clients.
//!
//! Service crates resolve a [`ClientConfig`] (usually from the environment)
//! into an [`Endpoint`] that carries both the URL to call and the region and
//! service name used in the SigV4 credential scope.

mod config;
mod endpoints;
mod error;
mod types;

pub use config::ClientConfig;
pub use endpoints::{Endpoint, resolve_endpoint};
pub use error::{ConfigError, ConfigResult};
pub use types::AwsRegion;
