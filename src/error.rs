use reqwest::StatusCode;
use thiserror::Error;

/// Why a backend call produced nothing. The screens only care that it
/// failed; the variant is kept for the logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Login response carried no token")]
    MissingToken,
}

impl ApiError {
    /// Short tag used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Status(_) => "status",
            ApiError::Decode(_) => "decode",
            ApiError::MissingToken => "missing_token",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
