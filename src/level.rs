//! Log severity levels and the filtering policy
//!
//! Two enums live here: [`LogLevel`] is the threshold the host configures,
//! and [`MessageLevel`] is the severity a single log call carries. They are
//! separate types because `None` is a valid threshold ("log nothing") but
//! never a valid message severity.

use crate::error::{CioError, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Configured severity threshold for the logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Log nothing
    None,
    /// Log errors only
    Error,
    /// Log errors and informational messages
    Info,
    /// Log everything
    Debug,
}

/// Severity of an individual log message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Error,
    Info,
    Debug,
}

impl LogLevel {
    /// Whether a message of the given severity passes this threshold.
    ///
    /// The mapping is an explicit policy table rather than an ordinal
    /// comparison: `Error` and `Info` are both admitted under the `Info`
    /// threshold, while `Debug` admits everything.
    pub fn should_log(self, message: MessageLevel) -> bool {
        match self {
            LogLevel::None => false,
            LogLevel::Error => message == MessageLevel::Error,
            LogLevel::Info => matches!(message, MessageLevel::Error | MessageLevel::Info),
            LogLevel::Debug => true,
        }
    }

    /// Parse a level from its configuration string form
    pub fn parse(level_str: &str) -> Result<Self> {
        match level_str.to_lowercase().as_str() {
            "none" => Ok(LogLevel::None),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(CioError::config(format!(
                "Invalid log level: {}",
                level_str
            ))),
        }
    }

    /// Configuration string form of this level
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = CioError;

    fn from_str(s: &str) -> Result<Self> {
        LogLevel::parse(s)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MessageLevel {
    /// Single-letter form used in the diagnostic file, Logcat-style
    pub fn letter(self) -> char {
        match self {
            MessageLevel::Error => 'E',
            MessageLevel::Info => 'I',
            MessageLevel::Debug => 'D',
        }
    }

    /// The platform log priority this severity maps to for the console sink
    pub fn as_tracing(self) -> Level {
        match self {
            MessageLevel::Error => Level::ERROR,
            MessageLevel::Info => Level::INFO,
            MessageLevel::Debug => Level::DEBUG,
        }
    }
}
