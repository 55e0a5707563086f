//! Shared error type across loyalty crates.

use thiserror::Error;

/// Machine-readable error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A metric was NaN or infinite.
    InvalidInput,
    /// Malformed configuration or request.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal failure (I/O, poisoned lock, serialization).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LoyaltyError>;

/// Unified error type used by core and tracker.
#[derive(Debug, Error)]
pub enum LoyaltyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl LoyaltyError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            LoyaltyError::InvalidInput(_) => ErrorCode::InvalidInput,
            LoyaltyError::BadRequest(_) => ErrorCode::BadRequest,
            LoyaltyError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            LoyaltyError::Internal(_) => ErrorCode::Internal,
        }
    }
}
