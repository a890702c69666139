use bridge_traits::{BridgeError, ErrorCode, HostPlatform};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// An options/params bag does not match the shape declared for the method.
    #[error("Invalid `{field}` supplied to `{method}`: expected {expected}, found {found}")]
    SchemaValidation {
        method: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("`{method}` called before Stripe.setOptions")]
    NotInitialized { method: String },

    #[error("`{method}` has no native pay implementation on platform `{platform}`")]
    UnsupportedPlatform {
        method: String,
        platform: HostPlatform,
    },

    #[error(transparent)]
    Native(#[from] BridgeError),

    #[error(transparent)]
    Config(#[from] core_runtime::Error),
}

impl PaymentError {
    /// Returns `true` for failures raised by the facade itself, before any
    /// bridge call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::SchemaValidation { .. } | Self::NotInitialized { .. } | Self::UnsupportedPlatform { .. }
        )
    }

    /// Native error code, if the bridge classified the failure.
    pub fn native_code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Native(BridgeError::Native { code, .. }) => Some(code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
