use thiserror::Error;

use crate::codes::ErrorCode;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// Failure classified by the native SDK.
    #[error("Native payment error [{domain} {code}]: {message}")]
    Native {
        domain: String,
        code: ErrorCode,
        message: String,
    },

    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),
}

impl BridgeError {
    pub fn native(
        domain: impl Into<String>,
        code: impl Into<ErrorCode>,
        message: impl Into<String>,
    ) -> Self {
        Self::Native {
            domain: domain.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a native failure carrying `code`.
    pub fn is_code(&self, code: &ErrorCode) -> bool {
        matches!(self, Self::Native { code: c, .. } if c == code)
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
