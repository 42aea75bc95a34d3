use axum::http::StatusCode;
use thiserror::Error;

/// Message returned to callers for any failure past URL validation.
/// The underlying cause is logged, never echoed back.
pub const FETCH_FAILURE_MESSAGE: &str =
    "Failed to fetch or analyze the page. Please verify the URL is reachable and try again.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Missing or malformed URL. User-correctable.
    #[error("{0}")]
    Validation(String),

    /// Network failure, timeout, non-success status or unreadable body.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::Validation(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message suitable for the `error` field of an HTTP response.
    pub fn public_message(&self) -> String {
        match self {
            AnalysisError::Validation(msg) => msg.clone(),
            AnalysisError::Fetch(_) => FETCH_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnalysisError::Fetch(format!("request timed out: {}", err))
        } else if err.is_connect() {
            AnalysisError::Fetch(format!("host unreachable: {}", err))
        } else if let Some(status) = err.status() {
            AnalysisError::Fetch(format!("non-success status {}", status))
        } else {
            AnalysisError::Fetch(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
