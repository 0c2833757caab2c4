//! # lvlog-core
//! Core utilities for lvlog - severities, line rendering and sinks.

mod config;
mod error;
mod record;
mod severity;
mod sink;

pub use config::LvlogConfig;
pub use error::{Diagnostic, Error, LogFatal};
pub use record::{Caller, LogRecord, TIMESTAMP_FORMAT, format_message, join_values};
pub use severity::Severity;
pub use sink::LogSink;
