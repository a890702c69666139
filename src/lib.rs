//! Workspace umbrella crate.
//!
//! Host applications can depend on `native-pay-workspace` alone and reach the
//! facade, the bridge contract and the runtime helpers through one path
//! instead of wiring each workspace crate individually.

pub use bridge_traits as bridge;
pub use core_runtime as runtime;
pub use core_service as service;

pub use core_service::{NativePay, PaymentError, PaymentService};
