use reqwest::Error as ReqwestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Could not reach server: {0}")]
    Connection(String),
    #[error("Not authorized to access {path}")]
    Forbidden { path: String },
    #[error("Server returned {status} for {path}")]
    Status { path: String, status: u16 },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification used to decide how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    AuthorizationFailure,
    OtherServerError,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Forbidden { .. } => ErrorKind::AuthorizationFailure,
            ApiError::Status { status: 403, .. } => ErrorKind::AuthorizationFailure,
            ApiError::Request(e) if e.status().map(|s| s.as_u16()) == Some(403) => {
                ErrorKind::AuthorizationFailure
            }
            ApiError::Request(e) if e.status().is_some() => ErrorKind::OtherServerError,
            ApiError::Request(_) | ApiError::Connection(_) => ErrorKind::NetworkFailure,
            ApiError::Status { .. } | ApiError::Serialization(_) => ErrorKind::OtherServerError,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        self.kind() == ErrorKind::AuthorizationFailure
    }

    /// Build the error for a non-success status code.
    pub fn from_status(path: &str, status: u16) -> Self {
        if status == 403 {
            ApiError::Forbidden {
                path: path.to_string(),
            }
        } else {
            ApiError::Status {
                path: path.to_string(),
                status,
            }
        }
    }
}
