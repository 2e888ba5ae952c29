//! Error types for awsbind configuration.

/// Errors raised while building a client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Region name is empty or contains characters outside `[a-z0-9-]`.
    #[error("invalid AWS region: {0:?}")]
    InvalidRegion(String),

    /// Endpoint override is not an absolute http(s) URL.
    #[error("invalid endpoint URL: {0:?} (must start with http:// or https://)")]
    InvalidEndpoint(String),

    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
}

/// Convenience result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
