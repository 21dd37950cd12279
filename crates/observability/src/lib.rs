//! Tracing/logging setup shared by storefront binaries.

pub mod config;
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, ParseLogFormatError};

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}
