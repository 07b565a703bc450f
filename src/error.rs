//! Error types for the `AwardWallet` client.

use thiserror::Error;

/// Main error type for the `AwardWallet` client.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connection, timeout, unreadable body)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid argument rejected before any request was sent
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// Error response returned by the `AwardWallet` API
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// Returns the API error if this is one.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Typed errors for non-2xx responses of the `AwardWallet` API.
///
/// Each variant corresponds to a class of HTTP status codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API key was missing or rejected (401).
    #[error("[{status}] {message}")]
    Authentication { status: u16, message: String },

    /// The API key is valid but may not access the resource (403).
    #[error("[{status}] {message}")]
    Authorization { status: u16, message: String },

    /// The member, connected user, account or provider does not exist (404).
    #[error("[{status}] {message}")]
    NotFound { status: u16, message: String },

    /// Too many requests (429).
    #[error("[{status}] {message} (retry after {retry_after}s)")]
    RateLimited {
        status: u16,
        message: String,
        retry_after: u32,
    },

    /// The request was malformed (400 and any other 4xx).
    #[error("[{status}] {message}")]
    Validation { status: u16, message: String },

    /// The API failed (5xx).
    #[error("[{status}] {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Build the variant matching an HTTP status code.
    #[must_use]
    pub fn from_status(status: u16, message: String, retry_after: Option<u32>) -> Self {
        match status {
            401 => Self::Authentication { status, message },
            403 => Self::Authorization { status, message },
            404 => Self::NotFound { status, message },
            429 => Self::RateLimited {
                status,
                message,
                retry_after: retry_after.unwrap_or(60),
            },
            500..=599 => Self::Server { status, message },
            _ => Self::Validation { status, message },
        }
    }

    /// Get the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Authentication { status, .. }
            | Self::Authorization { status, .. }
            | Self::NotFound { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. } => *status,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::Authorization { message, .. }
            | Self::NotFound { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Get the retry-after value for rate limited errors.
    #[must_use]
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            Self::RateLimited { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }

    /// Check if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        let msg = || "boom".to_string();

        assert!(matches!(
            ApiError::from_status(401, msg(), None),
            ApiError::Authentication { .. }
        ));
        assert!(matches!(
            ApiError::from_status(403, msg(), None),
            ApiError::Authorization { .. }
        ));
        assert!(matches!(
            ApiError::from_status(404, msg(), None),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            ApiError::from_status(400, msg(), None),
            ApiError::Validation { .. }
        ));
        assert!(matches!(
            ApiError::from_status(422, msg(), None),
            ApiError::Validation { .. }
        ));
        assert!(matches!(
            ApiError::from_status(503, msg(), None),
            ApiError::Server { .. }
        ));
    }

    #[test]
    fn test_rate_limited_error() {
        let error = ApiError::from_status(429, "Too many requests".to_string(), Some(30));

        assert_eq!(error.status(), 429);
        assert_eq!(error.retry_after(), Some(30));
        assert!(error.is_retryable());
        assert_eq!(error.to_string(), "[429] Too many requests (retry after 30s)");
    }

    #[test]
    fn test_rate_limited_defaults_retry_after() {
        let error = ApiError::from_status(429, "slow down".to_string(), None);
        assert_eq!(error.retry_after(), Some(60));
    }

    #[test]
    fn test_non_retryable_errors() {
        let auth_error = ApiError::Authentication {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert!(!auth_error.is_retryable());
        assert_eq!(auth_error.retry_after(), None);

        let not_found = ApiError::NotFound {
            status: 404,
            message: "Member not found".to_string(),
        };
        assert!(!not_found.is_retryable());
        assert_eq!(not_found.message(), "Member not found");
    }

    #[test]
    fn test_server_error_is_retryable() {
        let error = ApiError::Server {
            status: 500,
            message: "Internal server error".to_string(),
        };

        assert!(error.is_retryable());
    }

    #[test]
    fn test_as_api() {
        let err = Error::from(ApiError::from_status(404, "gone".to_string(), None));
        assert_eq!(err.as_api().map(ApiError::status), Some(404));
        assert!(Error::Http("reset".to_string()).as_api().is_none());
    }
}
