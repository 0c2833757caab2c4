//! # lvlog
//! Minimal leveled logger. Each line carries a timestamp, a severity and the
//! location of the call that produced it:
//!
//! ```text
//! 2024-03-09 07:05:01 |INFO| src/main.rs:12: 1 == 1
//! ```
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! lvlog = "0.1.0"
//! ```
//!
//! ```rust
//! use lvlog::Logger;
//!
//! let log = Logger::new(); // stderr, Info and above
//! log.info(&[&1, &"==", &1]);
//! lvlog::info!(log, "1 == {}", 1);
//! log.debug(&[&"not written"]);
//! ```
//!
//! ## Configuration
//! Every option overrides one field; the others keep their defaults.
//!
//! ```rust
//! use lvlog::{Severity, logger_config};
//!
//! let log = logger_config()
//!     .with_level(Severity::Trace)
//!     .with_log_file("/tmp/lvlog_doc.log")
//!     .expect("Unable to open log file")
//!     .build()
//!     .expect("valid level");
//! lvlog::trace!(log, "Hello, world!");
//! drop(log);
//! assert!(std::fs::read_to_string("/tmp/lvlog_doc.log").unwrap().ends_with("Hello, world!\n"));
//! ```
//!
//! Raw ordinals (1 = Fatal .. 6 = Trace) are checked when building:
//!
//! ```rust
//! use lvlog::{Error, logger_config};
//!
//! assert!(matches!(logger_config().with_level_ordinal(7).build(), Err(Error::InvalidLevel(7))));
//! ```
//!
//! ## Fatal
//! `fatal` and `fatalf` write their line and then panic with a [`LogFatal`]
//! payload, which unwinds like any other panic and can be told apart from one:
//!
//! ```rust
//! use lvlog::{LogFatal, Logger};
//!
//! let log = Logger::new();
//! let payload = std::panic::catch_unwind(|| lvlog::fatal!(log, "giving up")).unwrap_err();
//! assert!(payload.downcast_ref::<LogFatal>().is_some());
//! ```
//!
//! ## `log` facade
//! A logger can also back the `log` crate macros with [`Logger::init_global`].

mod facade;
mod logger;
mod macros;
#[cfg(test)]
mod test_utils;

pub use logger::Logger;
pub use lvlog_core::{Diagnostic, Error, LogFatal, LvlogConfig, Severity};

use lvlog_core::LogSink;
use std::{io::Write, path::Path};

/// Builder for configuring a [`Logger`].
pub struct LoggerBuilder {
    sink: LogSink,
    level: i64,
    colored: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            sink: LogSink::stderr(),
            level: Severity::default().ordinal().into(),
            colored: false,
        }
    }
}

impl LoggerBuilder {
    /// Validates the threshold and builds the logger.
    pub fn build(self) -> Result<Logger, Error> {
        let Self {
            sink,
            level,
            colored,
        } = self;
        let threshold = Severity::try_from(level)?;
        Ok(Logger {
            sink,
            threshold,
            colored,
        })
    }

    /// Sets the destination of log lines.
    pub fn with_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        Self {
            sink: LogSink::new(writer),
            ..self
        }
    }
    /// Logs to a file, created if it does not exist and appended to if it does.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Result<Self, Error> {
        Ok(Self {
            sink: LogSink::file(path)?,
            ..self
        })
    }
    /// Logs to stderr.
    pub fn with_stderr(self) -> Self {
        Self {
            sink: LogSink::stderr(),
            ..self
        }
    }
    /// Sets the threshold.
    pub fn with_level(self, level: Severity) -> Self {
        Self {
            level: level.ordinal().into(),
            ..self
        }
    }
    /// Sets the threshold from its ordinal, checked by [`build`](Self::build).
    pub fn with_level_ordinal(self, ordinal: i64) -> Self {
        Self {
            level: ordinal,
            ..self
        }
    }
    /// Colors the level label. Off by default.
    pub fn with_color(self, yes: bool) -> Self {
        Self {
            colored: yes,
            ..self
        }
    }
    /// Applies `LVLOG_LEVEL` and `LVLOG_COLOR`.
    pub fn with_env_config(self) -> Result<Self, Error> {
        let config = LvlogConfig::load()?;
        Ok(Self {
            level: config.level()?.ordinal().into(),
            colored: config.COLOR,
            ..self
        })
    }
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }
}

impl Default for Logger {
    fn default() -> Self {
        let LoggerBuilder {
            sink,
            level,
            colored,
        } = LoggerBuilder::default();
        Logger {
            sink,
            threshold: Severity::try_from(level).unwrap_or_default(),
            colored,
        }
    }
}

/// Returns a default LoggerBuilder for configuring the logger.
pub fn logger_config() -> LoggerBuilder {
    LoggerBuilder::default()
}
