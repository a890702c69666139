//! Error-classification constants published by the native module.
//!
//! The iOS module exposes integer codes while the Android module exposes
//! strings; both are carried as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single native error code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Int(i64),
    Text(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(code) => write!(f, "{}", code),
            Self::Text(code) => f.write_str(code),
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self::Int(code)
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        Self::Int(code.into())
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::Text(code.to_string())
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::Text(code)
    }
}

/// Error domain and codes read from the bridge when the facade is built.
///
/// Field names serialize to the constant names the native module exports so a
/// host can deserialize its constants map directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCodes {
    #[serde(rename = "TPSErrorDomain")]
    pub domain: String,

    /// Wallet exists but no payment method / merchant is configured.
    #[serde(rename = "TPSErrorCodeApplePayNotConfigured")]
    pub apple_pay_not_configured: ErrorCode,

    /// A payment request is already being presented.
    #[serde(rename = "TPSErrorCodePreviousRequestNotCompleted")]
    pub previous_request_not_completed: ErrorCode,

    #[serde(rename = "TPSErrorCodeUserCancel")]
    pub user_cancel: ErrorCode,
}
