//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the catalog API client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// 401 from an admin endpoint
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status(status)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
