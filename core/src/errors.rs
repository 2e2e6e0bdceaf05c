use crate::formatting::opt_u64_from_str_or_num;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletErrorCode {
    RequestFailed = 1,
    Timeout = 2,
    NodeError = 3,
    BadStatus = 4,
    InvalidResponse = 5,
    InvalidRequest = 6,
}
impl From<u8> for WalletErrorCode {
    fn from(byte: u8) -> Self {
        match byte {
            2 => WalletErrorCode::Timeout,
            3 => WalletErrorCode::NodeError,
            4 => WalletErrorCode::BadStatus,
            5 => WalletErrorCode::InvalidResponse,
            6 => WalletErrorCode::InvalidRequest,
            _ => WalletErrorCode::RequestFailed,
        }
    }
}

/// Error marker a wallet node embeds in an otherwise normal JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeError {
    #[serde(default, deserialize_with = "opt_u64_from_str_or_num")]
    pub error_code: Option<u64>,
    pub error_description: String,
}
impl Display for NodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.error_code {
            Some(code) => write!(f, "({code}) {}", self.error_description),
            None => write!(f, "{}", self.error_description),
        }
    }
}

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Failed to {method}, timed out after {timeout_ms} ms")]
    Timeout { method: String, timeout_ms: u64 },
    #[error("Failed to {method}: {message}")]
    Transport { method: String, message: String },
    #[error("Failed to {method}, node error: {error}")]
    Node { method: String, error: NodeError },
    #[error("Failed to {method}, Bad Status Code: {status}, {body}")]
    BadStatus {
        method: String,
        status: u16,
        body: String,
    },
    #[error("Failed to parse {method} response, Invalid Json: {message}")]
    InvalidResponse {
        method: String,
        message: String,
        body: String,
    },
    #[error("Invalid {method} request: {message}")]
    InvalidRequest { method: String, message: String },
}
impl WalletError {
    #[must_use]
    pub fn code(&self) -> WalletErrorCode {
        match self {
            WalletError::Timeout { .. } => WalletErrorCode::Timeout,
            WalletError::Transport { .. } => WalletErrorCode::RequestFailed,
            WalletError::Node { .. } => WalletErrorCode::NodeError,
            WalletError::BadStatus { .. } => WalletErrorCode::BadStatus,
            WalletError::InvalidResponse { .. } => WalletErrorCode::InvalidResponse,
            WalletError::InvalidRequest { .. } => WalletErrorCode::InvalidRequest,
        }
    }
    #[must_use]
    pub fn method(&self) -> &str {
        match self {
            WalletError::Timeout { method, .. }
            | WalletError::Transport { method, .. }
            | WalletError::Node { method, .. }
            | WalletError::BadStatus { method, .. }
            | WalletError::InvalidResponse { method, .. }
            | WalletError::InvalidRequest { method, .. } => method,
        }
    }
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, WalletError::Timeout { .. })
    }
    #[must_use]
    pub fn node_error(&self) -> Option<&NodeError> {
        match self {
            WalletError::Node { error, .. } => Some(error),
            _ => None,
        }
    }
}
impl From<WalletError> for std::io::Error {
    fn from(value: WalletError) -> Self {
        let kind = match value.code() {
            WalletErrorCode::Timeout => ErrorKind::TimedOut,
            WalletErrorCode::InvalidResponse => ErrorKind::InvalidData,
            WalletErrorCode::InvalidRequest => ErrorKind::InvalidInput,
            _ => ErrorKind::Other,
        };
        std::io::Error::new(kind, value.to_string())
    }
}
