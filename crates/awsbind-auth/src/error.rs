//! Error types for request signing and credential resolution.

/// Errors that can occur while resolving credentials or signing a request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// No provider in the chain produced credentials.
    #[error("no credentials found: {0}")]
    CredentialsNotFound(String),

    /// The shared credentials file exists but could not be parsed.
    #[error("failed to read credentials file {path}: {reason}")]
    CredentialsFile {
        /// Path of the file.
        path: String,
        /// Parser or I/O error message.
        reason: String,
    },

    /// The named profile is missing a required key.
    #[error("profile {profile:?} is missing {key}")]
    IncompleteProfile {
        /// Profile name.
        profile: String,
        /// Missing key, e.g. `aws_secret_access_key`.
        key: &'static str,
    },

    /// A header required for signing is absent and cannot be derived.
    #[error("missing required header: {0}")]
    MissingHeader(String),

    /// A header value is not visible ASCII and cannot be canonicalized.
    #[error("header {0} has a non-ASCII value")]
    InvalidHeaderValue(String),
}
