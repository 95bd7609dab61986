// ============================================================================
// ERRORS - Transport failures and their operator-facing classification
// ============================================================================

use std::fmt;

use serde_json::Value;

use crate::utils::constants::MSG_LOGIN_FAILED;

/// Raw outcome of a failed remote call, before classification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No response was received (DNS, refused connection, CORS, offline)
    #[error("Network Error: {0}")]
    Network(String),
    /// The store answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Http { status: u16, body: Option<String> },
    #[error("Parse error: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, TransportError::Network(_))
    }

    /// Error text supplied by the store in the response body, if any
    pub fn remote_detail(&self) -> Option<String> {
        match self {
            TransportError::Http { body: Some(body), .. } => extract_remote_message(body),
            _ => None,
        }
    }
}

fn extract_remote_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["message", "error", "detail"]
            .iter()
            .find_map(|key| {
                map.get(*key)
                    .and_then(Value::as_str)
                    .filter(|text| !text.trim().is_empty())
                    .map(str::to_string)
            })
            .or_else(|| Some(trimmed.to_string())),
        Ok(Value::String(text)) if text.trim().is_empty() => None,
        Ok(Value::String(text)) => Some(text),
        Ok(Value::Null) => None,
        _ => Some(trimmed.to_string()),
    }
}

/// Which remote operation failed; drives the error wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SyncAction::Fetch => "fetch students",
            SyncAction::Create => "create student",
            SyncAction::Update => "update student",
            SyncAction::Delete => "delete student",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Draft rejected locally; the store was never contacted
    #[error("{0}")]
    Validation(String),
    #[error("⚠️ Cannot connect to student API at {address}")]
    Connectivity { address: String },
    #[error("Failed to {action}: {message}")]
    Remote { action: SyncAction, message: String },
}

impl SyncError {
    /// Splits "store unreachable" from "store said no"; the two need
    /// different remediation and are never merged into one message.
    pub fn classify(action: SyncAction, error: TransportError, address: &str) -> Self {
        if error.is_connectivity() {
            return SyncError::Connectivity {
                address: address.to_string(),
            };
        }
        let message = error.remote_detail().unwrap_or_else(|| error.to_string());
        SyncError::Remote { action, message }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, SyncError::Connectivity { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{}", MSG_LOGIN_FAILED)]
    InvalidCredentials,
}
