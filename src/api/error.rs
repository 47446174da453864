use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend rejected the request. Carries the backend's `detail` message
    /// when one is present, so it can be shown to the user as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error payload shape used by the auth backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    /// Pull the backend's `detail` message out of an error body, if any.
    fn detail_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        if let Some(detail) = Self::detail_message(body) {
            return if status.is_server_error() {
                ApiError::ServerError(detail)
            } else {
                ApiError::Rejected(detail)
            };
        }
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            400..=499 => ApiError::Rejected(format!("Request rejected ({})", status)),
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}
