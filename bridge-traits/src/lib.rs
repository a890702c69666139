//! # Native Payment Bridge Traits
//!
//! Contract between the payment facade and the host-provided native module
//! that talks to the platform payment SDKs (PassKit on iOS, Google Pay on
//! Android, plus card and bank account tokenization).
//!
//! ## Overview
//!
//! The facade in `core-service` never talks to a payment SDK directly. Every
//! call ends at one of the traits in this crate, implemented once per host:
//!
//! | Trait | Methods |
//! |-------|---------|
//! | [`CapabilitiesQuery`](payments::CapabilitiesQuery) | device / wallet capability checks |
//! | [`PaymentRequestLifecycle`](payments::PaymentRequestLifecycle) | open, complete and cancel a payment sheet |
//! | [`Tokenization`](payments::Tokenization) | card form, card / bank tokens, payment sources |
//! | [`PaymentBridge`](payments::PaymentBridge) | all of the above plus `init` and the published error codes |
//!
//! Options and results cross the bridge as [`serde_json::Value`] so that the
//! host can hand them to its native module without another conversion.
//!
//! ## Error Handling
//!
//! All bridge methods return [`BridgeError`](error::BridgeError). SDK
//! classified failures (user cancelled, previous request still pending, wallet
//! not configured) arrive as [`BridgeError::Native`](error::BridgeError::Native)
//! carrying one of the codes the bridge publishes through
//! [`PaymentBridge::error_codes`](payments::PaymentBridge::error_codes).
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so a single bridge can be shared
//! behind an `Arc` by every task that uses the facade.
//!
//! ## Example
//!
//! ```ignore
//! use async_trait::async_trait;
//! use bridge_traits::payments::CapabilitiesQuery;
//! use bridge_traits::error::Result;
//! use serde_json::Value;
//!
//! struct PassKitBridge;
//!
//! #[async_trait]
//! impl CapabilitiesQuery for PassKitBridge {
//!     async fn device_supports_apple_pay(&self) -> Result<bool> {
//!         // PKPaymentAuthorizationViewController.canMakePayments()
//!         todo!()
//!     }
//!     // ...
//! }
//! ```

pub mod codes;
pub mod error;
pub mod log;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod payments;
pub mod platform;

pub use codes::{ErrorCode, ErrorCodes};
pub use error::BridgeError;

// Re-export commonly used types
pub use log::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use payments::{CapabilitiesQuery, PaymentBridge, PaymentRequestLifecycle, Tokenization};
pub use platform::HostPlatform;
