//! Logging initialization

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install the capture layer themselves
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Default directive when `RUST_LOG` is not set
fn default_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match profile {
        Profile::Production => EnvFilter::new("accessdata=info"),
        _ => EnvFilter::new("accessdata=debug"),
    })
}

/// Initialize the logging facility
///
/// Call once at startup; later calls are no-ops. Output goes to stderr so
/// stdout stays free for command output.
///
/// - **Development**: human-readable logs, debug level for `accessdata*` targets
/// - **Production**: JSON logs, info level
/// - **Test**: no output
///
/// ```
/// use accessdata_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            // try_init: a host process may already own the global subscriber
            let _ = tracing_subscriber::fmt()
                .with_env_filter(default_filter(profile))
                .with_writer(std::io::stderr)
                .with_target(false)
                .finish()
                .try_init();
        }
        Profile::Production => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(default_filter(profile))
                .with_writer(std::io::stderr)
                .finish()
                .try_init();
        }
        Profile::Test => {
            let _ = tracing_subscriber::registry().try_init();
        }
    });
}
