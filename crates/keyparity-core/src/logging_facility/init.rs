//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output with debug level
    Development,
    /// JSON structured output with info level
    Production,
    /// Human-readable output, silent unless `RUST_LOG` is set
    Quiet,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "keyparity=debug",
            Profile::Production => "keyparity=info",
            Profile::Test => "keyparity=warn",
            Profile::Quiet => "keyparity=off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
}

/// Initialize the logging facility
///
/// Call once at application startup; later calls are no-ops. All profiles
/// write to stderr so that report output on stdout stays machine-readable.
///
/// # Example
///
/// ```
/// use keyparity_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development | Profile::Quiet => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Test => {
            // Capture is installed separately via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}
