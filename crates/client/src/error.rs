//! Client-side error taxonomy.

use partstock_auth::StoreError;
use partstock_core::DomainError;

/// Failure of a single HTTP call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("token store unavailable: {0}")]
    Token(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure of a user-triggered action (load, login, create, ...).
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid user name or password")]
    InvalidCredentials,
    #[error("components could not be loaded")]
    LoadFailed,
}
