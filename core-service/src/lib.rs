//! Payment facade.
//!
//! This crate turns a host-provided [`PaymentBridge`](bridge_traits::PaymentBridge)
//! into one validated API for Apple Pay, Android Pay, the SDK card form and
//! token / source creation. Hosts build a
//! [`PaymentsConfig`](core_runtime::config::PaymentsConfig) (or hand a bridge
//! directly to [`PaymentService::with_bridge`]) and call the facade; the
//! facade checks the arguments, picks the native branch for the host
//! platform and forwards.
//!
//! Option and params arguments accept any `Serialize` value. The typed
//! structs in [`options`] produce the exact key names the native modules
//! read; `serde_json::json!` values work just as well.

pub mod error;
pub mod options;
pub mod schema;
pub mod service;
pub mod theme;

pub use error::{PaymentError, Result};
pub use service::{NativePay, PaymentService};
