//! # Structured Logging Module
//!
//! Console logging for the command line tools. Everything goes to stderr so
//! that dry-run output on stdout stays machine readable.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` (the number of `-v`
/// flags) selects the level. Calling this more than once is a no-op.
pub fn init_structured_logging(verbosity: u8) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(verbosity)));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter),
        );

        // A subscriber may already be installed, e.g. by a test harness
        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }
    });
}

/// Map `-v` occurrences to a log level
fn get_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Log structured data for a per-role pipeline step
pub fn log_role_operation(operation: &str, role: &str, status: &str) {
    tracing::info!(
        operation = %operation,
        role = %role,
        status = %status,
        timestamp = %Utc::now().to_rfc3339(),
        "ROLE_OPERATION"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "ERROR"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level(0), "info");
        assert_eq!(get_log_level(1), "debug");
        assert_eq!(get_log_level(2), "trace");
        assert_eq!(get_log_level(9), "trace");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_structured_logging(0);
        init_structured_logging(3);
        log_role_operation("test", "role", "ok");
    }
}
