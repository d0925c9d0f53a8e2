use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MessageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    OutOfOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("message {id} has no sender address")]
    MissingSender { id: MessageId },
    #[error("message {id} has negative timestamp {timestamp}")]
    NegativeTimestamp { id: MessageId, timestamp: i64 },
    #[error("message {id} has negative expiry {expires_in_ms}ms")]
    NegativeExpiry { id: MessageId, expires_in_ms: i64 },
    #[error("message {id} at {timestamp} precedes message {previous} at {previous_timestamp}")]
    OutOfOrder {
        id: MessageId,
        timestamp: i64,
        previous: MessageId,
        previous_timestamp: i64,
    },
}

impl ModelError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ModelError::OutOfOrder { .. } => ErrorCode::OutOfOrder,
            _ => ErrorCode::Validation,
        }
    }
}
