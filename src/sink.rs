//! Console sink for log output
//!
//! The console side of the logger is assumed to never fail on the target
//! platform, so the [`ConsoleSink`] trait takes no `Result`. The default
//! implementation routes through the tracing ecosystem at each message's
//! native priority; tests substitute a capturing sink.

use crate::level::{LogLevel, MessageLevel};
use std::sync::Once;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Destination for the always-available console half of a log call
pub trait ConsoleSink: Send + Sync {
    fn write(&self, level: MessageLevel, tag: &str, message: &str);
}

/// Console sink backed by the tracing macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl ConsoleSink for TracingConsole {
    fn write(&self, level: MessageLevel, tag: &str, message: &str) {
        match level {
            MessageLevel::Error => error!(%tag, "{}", message),
            MessageLevel::Info => info!(%tag, "{}", message),
            MessageLevel::Debug => debug!(%tag, "{}", message),
        }
    }
}

/// Install a global tracing subscriber for console output, best-effort.
///
/// Optional: hosts that already run their own subscriber skip this and the
/// default sink feeds into theirs; losing the race to install is not an
/// error. Safe to call more than once; only the first call installs
/// anything. The `CIO_LOG` environment variable overrides the filter.
pub fn init_console(level: LogLevel) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env("CIO_LOG")
            .unwrap_or_else(|_| EnvFilter::new(directive_for(level)));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .finish();

        // A subscriber installed elsewhere wins; the sink emits into it.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn directive_for(level: LogLevel) -> &'static str {
    match level {
        LogLevel::None => "off",
        LogLevel::Error => "error",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_mapping() {
        assert_eq!(directive_for(LogLevel::None), "off");
        assert_eq!(directive_for(LogLevel::Error), "error");
        assert_eq!(directive_for(LogLevel::Info), "info");
        assert_eq!(directive_for(LogLevel::Debug), "debug");
    }

    #[test]
    fn test_init_console_is_idempotent() {
        init_console(LogLevel::Debug);
        init_console(LogLevel::None);
    }

    #[test]
    fn test_init_console_tolerates_host_subscriber() {
        // A host application may have installed its own global subscriber
        // before the SDK initializes; that must not be observable as a
        // failure, on the first call or any later one.
        let host = tracing_subscriber::fmt().finish();
        let _ = tracing::subscriber::set_global_default(host);

        init_console(LogLevel::Debug);
        init_console(LogLevel::Info);
    }

    #[test]
    fn test_tracing_console_does_not_panic() {
        let sink = TracingConsole;
        sink.write(MessageLevel::Error, "[CIO]", "error message");
        sink.write(MessageLevel::Info, "[CIO]", "info message");
        sink.write(MessageLevel::Debug, "[CIO]", "debug message");
    }
}
