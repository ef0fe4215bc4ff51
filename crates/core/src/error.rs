//! Construction-time error types
//!
//! The synthesizer never fails on per-tick data; the only fatal error is an
//! unsupported vehicle variant at construction.

/// Errors raised when building a synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Fingerprint does not match any supported vehicle variant
    UnknownVariant,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnknownVariant => write!(f, "unknown vehicle variant"),
        }
    }
}

impl core::error::Error for ConfigError {}
