//! Error types returned by service calls.

use std::fmt;

use awsbind_auth::AuthError;
use awsbind_core::ConfigError;
use awsbind_query::XmlError;

/// Error code EC2 returns when a `DryRun` request would have succeeded.
pub const DRY_RUN_OPERATION: &str = "DryRunOperation";

/// An error reported by the service itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ServiceError {
    /// Service error code, e.g. `InvalidInstanceID.NotFound`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Request ID, when the service sent one.
    pub request_id: Option<String>,
    /// HTTP status code.
    pub status: u16,
}

impl ServiceError {
    /// Whether this is EC2's "the dry run would have succeeded" answer.
    #[must_use]
    pub fn is_dry_run_success(&self) -> bool {
        self.code == DRY_RUN_OPERATION
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {}): {}", self.code, self.status, self.message)?;
        if let Some(id) = &self.request_id {
            write!(f, " [request id: {id}]")?;
        }
        Ok(())
    }
}

/// Errors returned by awsbind service calls.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Client configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credentials could not be resolved or the request could not be signed.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The request could not be constructed from the input.
    #[error("failed to build request: {0}")]
    Build(String),

    /// The request could not be delivered or the response not read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// An XML response body could not be parsed.
    #[error("failed to parse XML response: {0}")]
    Xml(#[from] XmlError),

    /// A JSON body could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service rejected the request.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl SdkError {
    /// Service error code, if the service rejected the request.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service(e) => Some(e.code.as_str()),
            _ => None,
        }
    }

    /// The service error, if any.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this is a `DryRunOperation` answer to a dry run.
    #[must_use]
    pub fn is_dry_run_success(&self) -> bool {
        self.as_service_error()
            .is_some_and(ServiceError::is_dry_run_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_error(code: &str) -> ServiceError {
        ServiceError {
            code: code.to_owned(),
            message: "Request would have succeeded, but DryRun flag is set.".to_owned(),
            request_id: Some("req-1".to_owned()),
            status: 412,
        }
    }

    #[test]
    fn test_should_detect_dry_run_success() {
        let err = SdkError::from(service_error("DryRunOperation"));
        assert!(err.is_dry_run_success());
        assert_eq!(err.code(), Some("DryRunOperation"));
        assert!(!SdkError::from(service_error("UnauthorizedOperation")).is_dry_run_success());
        assert!(!SdkError::Timeout.is_dry_run_success());
    }

    #[test]
    fn test_should_format_service_error() {
        let err = SdkError::from(service_error("DryRunOperation"));
        assert_eq!(
            err.to_string(),
            "DryRunOperation (HTTP 412): Request would have succeeded, but DryRun flag is set. \
             [request id: req-1]"
        );
    }
}
