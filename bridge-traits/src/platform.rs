//! Host platform detection.
//!
//! The platform is resolved from `target_os` at compile time. Configuration
//! may override it (simulators, contract tests), which is why it is a value
//! rather than a set of `cfg` branches in the facade itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system hosting the native payment module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    Ios,
    Android,
    /// Any host without a native wallet SDK (desktop, CI, web).
    Other(String),
}

impl HostPlatform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        #[cfg(target_os = "ios")]
        {
            Self::Ios
        }
        #[cfg(target_os = "android")]
        {
            Self::Android
        }
        #[cfg(not(any(target_os = "ios", target_os = "android")))]
        {
            Self::Other(std::env::consts::OS.to_string())
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => f.write_str("ios"),
            Self::Android => f.write_str("android"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_target() {
        let platform = HostPlatform::current();

        #[cfg(not(any(target_os = "ios", target_os = "android")))]
        {
            assert_eq!(platform, HostPlatform::Other(std::env::consts::OS.to_string()));
            assert!(!platform.is_mobile());
        }

        #[cfg(any(target_os = "ios", target_os = "android"))]
        assert!(platform.is_mobile());
    }

    #[test]
    fn test_display() {
        assert_eq!(HostPlatform::Ios.to_string(), "ios");
        assert_eq!(HostPlatform::Android.to_string(), "android");
        assert_eq!(HostPlatform::Other("linux".into()).to_string(), "linux");
    }
}
