//! Leveled line logger with console and best-effort file output
//!
//! [`LineLogger`] is the crate's public surface: three severity-specific
//! calls gated by the configured threshold. A permitted call always reaches
//! the console sink and then attempts one append to a day-partitioned text
//! file. The file half can fail for many platform reasons (storage permission
//! changes across OS versions, missing directories, full disks) and none of
//! that is critical to the SDK, so every failure on that path is contained
//! here and the host never sees it.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::level::{LogLevel, MessageLevel};
use crate::sink::{ConsoleSink, TracingConsole};
use crate::storage::{DownloadsDir, FixedDir, LogDir};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;

/// Marker prefix on every console line
pub const LOG_TAG: &str = "[CIO]";

/// Filename prefix for the diagnostic files
const FILE_PREFIX: &str = "customerio-sdk-logs";

/// Logging interface exposed to the rest of the SDK
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger that writes single formatted lines to the console and, best-effort,
/// to a local per-day diagnostic file
pub struct LineLogger {
    level: LogLevel,
    console: Arc<dyn ConsoleSink>,
    dir: Arc<dyn LogDir>,
    clock: Arc<dyn Clock>,
}

impl LineLogger {
    /// Create a logger from the host configuration.
    ///
    /// The configured severity is read once here; reconfiguring requires
    /// constructing a new logger.
    pub fn new(config: &Config) -> Result<Self> {
        let level = config.log_level()?;
        let dir: Arc<dyn LogDir> = match &config.logging.dir {
            Some(path) => Arc::new(FixedDir(path.clone())),
            None => Arc::new(DownloadsDir),
        };

        Ok(Self {
            level,
            console: Arc::new(TracingConsole),
            dir,
            clock: Arc::new(SystemClock),
        })
    }

    /// Create a logger with explicit sinks and clock
    pub fn with_sinks(
        level: LogLevel,
        console: Arc<dyn ConsoleSink>,
        dir: Arc<dyn LogDir>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            level,
            console,
            dir,
            clock,
        }
    }

    /// The threshold this logger was constructed with
    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, message_level: MessageLevel, message: &str) {
        if !self.level.should_log(message_level) {
            return;
        }

        self.console.write(message_level, LOG_TAG, message);

        // The file half is strictly best-effort. Nothing is logged about a
        // failure, not even to the console sink, so a persistent storage
        // problem cannot spam the customer's logs on every call.
        let _ = self.append_line(message_level, message);
    }

    /// Append one formatted line to today's diagnostic file.
    ///
    /// Opens, writes, flushes, and closes within this call; no handle is held
    /// across calls and concurrent writers may interleave.
    fn append_line(&self, message_level: MessageLevel, message: &str) -> Result<()> {
        let now = self.clock.now();
        let target = self.dir.resolve()?;

        // One file per day keeps any single file from growing unbounded.
        let file_name = format!("{}-{}.txt", FILE_PREFIX, now.format("%Y-%m-%d"));
        let path = target.join(file_name);

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        let timestamp = now.format("%Y-%m-%dT%H:%M:%S%.3f%:z");
        // Formatted to look like Logcat output.
        let line = format!("{} {}: {}\n", timestamp, message_level.letter(), message);
        file.write_all(line.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

impl Logger for LineLogger {
    fn info(&self, message: &str) {
        self.log(MessageLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(MessageLevel::Debug, message);
    }

    fn error(&self, message: &str) {
        self.log(MessageLevel::Error, message);
    }
}
