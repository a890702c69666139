//! # Payments Configuration Module
//!
//! Builder for the dependencies and settings the payment facade is
//! constructed from.
//!
//! ## Overview
//!
//! The facade owns no global state: hosts build a [`PaymentsConfig`] with the
//! native bridge they ship and hand it to `PaymentService::new`. The builder
//! fails fast when the bridge is missing so a misconfigured host learns about
//! it at startup rather than on the first payment.
//!
//! ## Required Dependencies
//!
//! - `PaymentBridge` - the native module (PassKit / Google Pay / card SDK)
//!
//! ## Optional Settings
//!
//! - `HostPlatform` - defaults to the compile target (`HostPlatform::current()`)
//! - `LoggingConfig` - defaults to [`LoggingConfig::default`]
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::PaymentsConfig;
//! use bridge_traits::HostPlatform;
//! use std::sync::Arc;
//!
//! let config = PaymentsConfig::builder()
//!     .bridge(Arc::new(MyNativeBridge::new()))
//!     .platform(HostPlatform::Ios)
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::{HostPlatform, PaymentBridge};
use std::sync::Arc;

/// Configuration for the payment facade.
///
/// Use [`PaymentsConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct PaymentsConfig {
    /// Native payment module (required)
    pub bridge: Arc<dyn PaymentBridge>,

    /// Host the facade dispatches for
    pub platform: HostPlatform,

    /// Logging settings used by `init_logging` at host bootstrap
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for PaymentsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentsConfig")
            .field("bridge", &"PaymentBridge { ... }")
            .field("platform", &self.platform)
            .field("log_format", &self.logging.format)
            .field("log_level", &self.logging.level)
            .finish()
    }
}

impl PaymentsConfig {
    /// Creates a new builder for constructing a `PaymentsConfig`.
    pub fn builder() -> PaymentsConfigBuilder {
        PaymentsConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - A fallback platform carries a non-empty name
    /// - A custom log filter, if set, is not blank
    pub fn validate(&self) -> Result<()> {
        if let HostPlatform::Other(name) = &self.platform {
            if name.trim().is_empty() {
                return Err(Error::Config(
                    "Host platform name cannot be empty".to_string(),
                ));
            }
        }

        if let Some(filter) = &self.logging.filter {
            if filter.trim().is_empty() {
                return Err(Error::Config(
                    "Log filter cannot be blank. Omit it to use the default filter.".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn bridge_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "PaymentBridge".to_string(),
        message: "A native payment bridge is required. \
                 iOS: inject the PassKit-backed module. \
                 Android: inject the Google Pay-backed module. \
                 Tests: inject a mock bridge."
            .to_string(),
    }
}

/// Builder for constructing [`PaymentsConfig`] instances.
#[derive(Default)]
pub struct PaymentsConfigBuilder {
    bridge: Option<Arc<dyn PaymentBridge>>,
    platform: Option<HostPlatform>,
    logging: Option<LoggingConfig>,
}

impl PaymentsConfigBuilder {
    /// Sets the native bridge implementation (required).
    pub fn bridge(mut self, bridge: Arc<dyn PaymentBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Overrides the detected host platform.
    ///
    /// Useful for simulators and for exercising both branches in tests.
    pub fn platform(mut self, platform: HostPlatform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] if no bridge was provided
    /// - [`Error::Config`] if validation fails
    pub fn build(self) -> Result<PaymentsConfig> {
        let bridge = self.bridge.ok_or_else(bridge_missing_error)?;

        let config = PaymentsConfig {
            bridge,
            platform: self.platform.unwrap_or_else(HostPlatform::current),
            logging: self.logging.unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::mock::MockBridge;

    #[test]
    fn test_build_requires_bridge() {
        let result = PaymentsConfig::builder().platform(HostPlatform::Ios).build();

        match result {
            Err(Error::CapabilityMissing { capability, .. }) => {
                assert_eq!(capability, "PaymentBridge");
            }
            other => panic!("expected CapabilityMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_build_defaults_to_current_platform() {
        let config = PaymentsConfig::builder()
            .bridge(Arc::new(MockBridge::new()))
            .build()
            .unwrap();

        assert_eq!(config.platform, HostPlatform::current());
        assert_eq!(config.logging.level, LoggingConfig::default().level);
    }

    #[test]
    fn test_build_with_platform_override() {
        let config = PaymentsConfig::builder()
            .bridge(Arc::new(MockBridge::new()))
            .platform(HostPlatform::Android)
            .build()
            .unwrap();

        assert_eq!(config.platform, HostPlatform::Android);
        assert!(format!("{:?}", config).contains("Android"));
    }

    #[test]
    fn test_validate_rejects_unnamed_platform() {
        let result = PaymentsConfig::builder()
            .bridge(Arc::new(MockBridge::new()))
            .platform(HostPlatform::Other("  ".to_string()))
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_filter() {
        let result = PaymentsConfig::builder()
            .bridge(Arc::new(MockBridge::new()))
            .logging(LoggingConfig::default().with_filter(""))
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
