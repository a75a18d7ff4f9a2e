use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Invalid API key: {0}")]
    ApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Error body PostgREST sends alongside a non-2xx status.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

impl ClientError {
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<PostgrestError>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| body.trim().to_string());
        ClientError::Status { status, message }
    }
}
