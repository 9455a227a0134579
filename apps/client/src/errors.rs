#![allow(dead_code)]

use thiserror::Error;

use crate::notify::NoticeKind;

/// Client-level error type shared by the remote adapter and the flows that
/// call it. Every remote failure is converted to a user-visible notification
/// at the call site; nothing propagates past the owning flow.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server rejected the request: {0}")]
    Server(String),

    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl ClientError {
    /// Maps the error to the notification shown to the user.
    /// Server-supplied messages are surfaced verbatim; transport failures get
    /// a generic message, except timeouts which are called out distinctly.
    pub fn user_notice(&self) -> (NoticeKind, String) {
        match self {
            ClientError::Validation(msg) => (NoticeKind::Error, msg.clone()),
            ClientError::Timeout => (
                NoticeKind::Error,
                "The request timed out. Check your connection and try again.".to_string(),
            ),
            ClientError::Network(e) => {
                tracing::error!("Network error: {e}");
                (
                    NoticeKind::Error,
                    "Network error. Please try again.".to_string(),
                )
            }
            ClientError::Server(msg) => (NoticeKind::Error, msg.clone()),
            ClientError::Parse(e) => {
                tracing::error!("Response parse error: {e}");
                (
                    NoticeKind::Error,
                    "Received an unexpected response from the server.".to_string(),
                )
            }
            ClientError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    NoticeKind::Error,
                    "Something went wrong. Please try again.".to_string(),
                )
            }
        }
    }
}
