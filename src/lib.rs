//! # cio-logger - Leveled diagnostics logging for the Customer.io client SDK
//!
//! A small logging facility for the mobile client library: log calls are
//! filtered by a host-configured severity, written to the console at their
//! native priority, and appended best-effort to a local per-day text file so
//! customers can pull diagnostics off a device.
//!
//! ## Guarantees
//!
//! - **Never throws**: no logging call returns an error or panics into the
//!   host application, whatever the storage layer does
//! - **Best-effort file output**: the diagnostic file is a convenience, not a
//!   durability contract; failures are contained and silent
//! - **Thread-safe**: callable from any host thread, no internal locking
//!
//! ## Architecture
//!
//! - `config`: YAML configuration with validation
//! - `level`: severity levels and the filtering policy
//! - `logger`: the `LineLogger` and its `Logger` trait
//! - `sink`: console output via the tracing ecosystem
//! - `storage`: writable-log-directory resolution per platform
//! - `clock`: time source abstraction for testable timestamps
//!
//! ## Example
//!
//! ```no_run
//! use cio_logger::{Config, LineLogger, Logger};
//!
//! let mut config = Config::default();
//! config.logging.level = "info".to_string();
//!
//! let logger = LineLogger::new(&config)?;
//! logger.info("identify request queued");
//! logger.debug("filtered out at info level");
//! # Ok::<(), cio_logger::CioError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod storage;

// Re-export commonly used types
pub use config::{Config, LoggingConfig};
pub use error::{CioError, Result};
pub use level::{LogLevel, MessageLevel};
pub use logger::{LineLogger, Logger, LOG_TAG};
pub use sink::{init_console, ConsoleSink, TracingConsole};
pub use storage::{DownloadsDir, FixedDir, LogDir};
