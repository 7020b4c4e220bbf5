use reqwest::StatusCode;
use thiserror::Error;

use crate::errors::ErrorCode;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Transport error: {detail}")]
    Transport { code: ErrorCode, detail: String },
    #[error("Server error {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("Decode error: {detail}")]
    Decode { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl ClientError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Validation { code, .. } => *code,
            ClientError::Transport { code, .. } => *code,
            ClientError::Server { status, .. } if status.is_client_error() => {
                ErrorCode::ServerRejected
            }
            ClientError::Server { .. } => ErrorCode::ServerError,
            ClientError::Decode { .. } => ErrorCode::DecodeError,
            ClientError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Text the server attached to an error response, if any.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ClientError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation { .. })
    }

    /// Message to show the player in place of the failed action's result.
    ///
    /// Validation details and server details are shown verbatim; everything
    /// else falls back to the action's generic message.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation { detail, .. } => detail.clone(),
            ClientError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn validation(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            code: ErrorCode::TransportError,
            detail: detail.into(),
        }
    }

    pub fn timeout(detail: impl Into<String>) -> Self {
        Self::Transport {
            code: ErrorCode::Timeout,
            detail: detail.into(),
        }
    }

    pub fn server(status: StatusCode, detail: Option<String>) -> Self {
        Self::Server { status, detail }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::timeout(format!("request timed out: {e}"))
        } else if e.is_decode() {
            ClientError::decode(format!("unexpected response body: {e}"))
        } else if let Some(status) = e.status() {
            ClientError::server(status, None)
        } else {
            ClientError::transport(format!("request failed: {e}"))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::decode(format!("invalid JSON: {e}"))
    }
}
