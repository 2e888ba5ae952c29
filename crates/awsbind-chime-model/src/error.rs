//! Chime error types.
//!
//! Chime returns `{"Code": ..., "Message": ...}` bodies and repeats the
//! exception name in the `x-amzn-ErrorType` header.

use std::fmt;

/// Exceptions modelled by the Chime API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChimeErrorCode {
    /// The input is malformed or violates a constraint.
    BadRequestException,
    /// The caller is not allowed to perform the operation.
    ForbiddenException,
    /// The resource does not exist.
    NotFoundException,
    /// The request conflicts with the current state of the resource.
    ConflictException,
    /// The caller is sending requests too fast.
    ThrottledClientException,
    /// The caller could not be authenticated.
    UnauthorizedClientException,
    /// An account or resource limit was hit.
    ResourceLimitExceededException,
    /// The request is well formed but cannot be processed.
    UnprocessableEntityException,
    /// The service failed.
    ServiceFailureException,
    /// The service is temporarily unavailable.
    ServiceUnavailableException,
    /// Any other code, kept as received.
    Unknown(String),
}

impl ChimeErrorCode {
    /// Parse an error code or `x-amzn-ErrorType` value.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "BadRequestException" => Self::BadRequestException,
            "ForbiddenException" => Self::ForbiddenException,
            "NotFoundException" => Self::NotFoundException,
            "ConflictException" => Self::ConflictException,
            "ThrottledClientException" => Self::ThrottledClientException,
            "UnauthorizedClientException" => Self::UnauthorizedClientException,
            "ResourceLimitExceededException" => Self::ResourceLimitExceededException,
            "UnprocessableEntityException" => Self::UnprocessableEntityException,
            "ServiceFailureException" => Self::ServiceFailureException,
            "ServiceUnavailableException" => Self::ServiceUnavailableException,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// The wire error code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BadRequestException => "BadRequestException",
            Self::ForbiddenException => "ForbiddenException",
            Self::NotFoundException => "NotFoundException",
            Self::ConflictException => "ConflictException",
            Self::ThrottledClientException => "ThrottledClientException",
            Self::UnauthorizedClientException => "UnauthorizedClientException",
            Self::ResourceLimitExceededException => "ResourceLimitExceededException",
            Self::UnprocessableEntityException => "UnprocessableEntityException",
            Self::ServiceFailureException => "ServiceFailureException",
            Self::ServiceUnavailableException => "ServiceUnavailableException",
            Self::Unknown(code) => code,
        }
    }

    /// HTTP status the service pairs with this code.
    #[must_use]
    pub fn status_code(&self) -> Option<http::StatusCode> {
        let status = match self {
            Self::BadRequestException => http::StatusCode::BAD_REQUEST,
            Self::UnauthorizedClientException => http::StatusCode::UNAUTHORIZED,
            Self::ForbiddenException => http::StatusCode::FORBIDDEN,
            Self::NotFoundException => http::StatusCode::NOT_FOUND,
            Self::ConflictException => http::StatusCode::CONFLICT,
            Self::ResourceLimitExceededException => http::StatusCode::BAD_REQUEST,
            Self::UnprocessableEntityException => http::StatusCode::UNPROCESSABLE_ENTITY,
            Self::ThrottledClientException => http::StatusCode::TOO_MANY_REQUESTS,
            Self::ServiceFailureException => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailableException => http::StatusCode::SERVICE_UNAVAILABLE,
            Self::Unknown(_) => return None,
        };
        Some(status)
    }
}

impl From<&str> for ChimeErrorCode {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ChimeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_known_and_unknown_codes() {
        assert_eq!(
            ChimeErrorCode::from_code("NotFoundException"),
            ChimeErrorCode::NotFoundException
        );
        let other = ChimeErrorCode::from("AccessDeniedException");
        assert_eq!(other.as_str(), "AccessDeniedException");
        assert_eq!(other.status_code(), None);
    }

    #[test]
    fn test_should_map_status_codes() {
        assert_eq!(
            ChimeErrorCode::ThrottledClientException.status_code(),
            Some(http::StatusCode::TOO_MANY_REQUESTS)
        );
        assert_eq!(ChimeErrorCode::ConflictException.to_string(), "ConflictException");
    }
}
