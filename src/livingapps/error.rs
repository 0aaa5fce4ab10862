use std::fmt;

use reqwest::StatusCode;

/// Failure talking to the record API. Passed through to callers as-is.
#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Status { status: StatusCode, body: String },
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "Request failed: {e}"),
            ApiError::Status { status, body } if body.is_empty() => {
                write!(f, "API responded with {status}")
            }
            ApiError::Status { status, body } => write!(f, "API responded with {status}: {body}"),
            ApiError::Decode(e) => write!(f, "Unreadable API response: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Decode(e) => Some(e),
            ApiError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e)
    }
}
