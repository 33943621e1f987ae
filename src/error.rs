//! Error types for the Hypothesis API client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! HTTP-level failures carry the offending status code and the raw response
//! body so callers can diagnose what the service actually said.

use thiserror::Error;

/// The main error type for the Hypothesis API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // API Errors (mapped from response status)
    // ============================================================================
    #[error("Authentication failed (HTTP {status}): check your API key")]
    Authentication { status: u16, body: String },

    #[error("Permission denied (HTTP {status})")]
    PermissionDenied { status: u16, body: String },

    #[error("Resource not found (HTTP {status})")]
    NotFound { status: u16, body: String },

    #[error("API request failed with HTTP {status}")]
    RequestFailed { status: u16, body: String },

    // ============================================================================
    // Client-Side Errors
    // ============================================================================
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Classify a non-success HTTP status into the API error taxonomy.
    ///
    /// 401 and 403 map to the credential/permission variants, 404 to
    /// [`Error::NotFound`]; anything else becomes the catch-all
    /// [`Error::RequestFailed`].
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 => Self::Authentication { status, body },
            403 => Self::PermissionDenied { status, body },
            404 => Self::NotFound { status, body },
            _ => Self::RequestFailed { status, body },
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// The HTTP status code behind this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::PermissionDenied { status, .. }
            | Self::NotFound { status, .. }
            | Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body behind this error, if it came from a response
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Authentication { body, .. }
            | Self::PermissionDenied { body, .. }
            | Self::NotFound { body, .. }
            | Self::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type alias for the Hypothesis API client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(401 => matches Error::Authentication { .. } ; "unauthorized")]
    #[test_case(403 => matches Error::PermissionDenied { .. } ; "forbidden")]
    #[test_case(404 => matches Error::NotFound { .. } ; "not found")]
    #[test_case(400 => matches Error::RequestFailed { .. } ; "bad request")]
    #[test_case(500 => matches Error::RequestFailed { .. } ; "server error")]
    fn test_from_status_classification(status: u16) -> Error {
        Error::from_status(status, "body")
    }

    #[test]
    fn test_error_carries_status_and_body() {
        let err = Error::from_status(403, "{\"reason\": \"group is private\"}");
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.response_body(),
            Some("{\"reason\": \"group is private\"}")
        );
    }

    #[test]
    fn test_client_side_errors_have_no_status() {
        let err = Error::invalid_input("payload must include 'uri'");
        assert_eq!(err.status(), None);
        assert_eq!(err.response_body(), None);
        assert_eq!(err.to_string(), "Invalid input: payload must include 'uri'");
    }

    #[test]
    fn test_error_display() {
        let err = Error::from_status(401, "Unauthorized");
        assert_eq!(
            err.to_string(),
            "Authentication failed (HTTP 401): check your API key"
        );
    }
}
