use std::{fmt, io};

/// Errors returned while configuring a logger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("log: invalid log level {0}")]
    InvalidLevel(i64),
    #[error("log: unknown log level {0:?}")]
    UnknownLevel(String),
    #[error("log: invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Non-fatal conditions hit while emitting a line.
///
/// These are never returned to the caller of a logging operation. They are
/// printed to the process's standard error, bypassing the configured sink.
#[derive(Debug, thiserror::Error)]
pub enum Diagnostic {
    #[error("log: err getting caller")]
    CallerResolutionFailed,
    #[error("log: err writing log: {0}")]
    SinkWriteFailed(io::Error),
    #[error("log: err unexpected bytes written: {expected} {written}")]
    ShortWrite { expected: usize, written: usize },
}

impl Diagnostic {
    pub fn report(&self) {
        eprintln!("{self}");
    }
}

/// Payload of the panic raised by fatal operations.
///
/// Recover it with `std::panic::catch_unwind` and `downcast_ref::<LogFatal>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFatal;

impl fmt::Display for LogFatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("log: error log FATAL")
    }
}

impl std::error::Error for LogFatal {}
