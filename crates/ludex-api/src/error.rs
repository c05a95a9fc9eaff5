use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Service-level errors with user-friendly messages
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Map an HTTP status + body to the appropriate error variant.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 {
            Self::Unauthenticated
        } else {
            Self::Status { status, message }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}
