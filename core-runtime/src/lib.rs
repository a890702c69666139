//! # Core Runtime Module
//!
//! Foundational runtime infrastructure shared by the payment facade:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! The facade itself lives in `core-service`. This crate holds what a host
//! sets up once at startup: the `tracing` subscriber (optionally mirrored into
//! a host [`LoggerSink`](bridge_traits::log::LoggerSink)) and the validated
//! [`PaymentsConfig`](config::PaymentsConfig) the facade is built from.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
