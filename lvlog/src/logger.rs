use std::{
    fmt::{Arguments, Display},
    panic::Location,
};

use lvlog_core::{
    Caller, LogFatal, LogRecord, LogSink, Severity, format_message, join_values,
};

/// Leveled logger writing one line per accepted call to its sink.
///
/// Each severity has a plain form taking a list of values joined by spaces,
/// and a formatted form taking `format_args!` output (see the [`info!`](crate::info)
/// family of macros). The reported location is the site calling the operation.
#[derive(Debug)]
pub struct Logger {
    pub(crate) sink: LogSink,
    pub(crate) threshold: Severity,
    pub(crate) colored: bool,
}

impl Logger {
    /// Logger with every [`LoggerBuilder`](crate::LoggerBuilder) default: stderr, `Info` threshold.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Whether a call at `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold.permits(severity)
    }

    /// Writes the line, then raises the fatal signal as a panic carrying [`LogFatal`].
    ///
    /// The signal is raised whatever happened to the write.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.log_values(Severity::Fatal, values, Location::caller());
        std::panic::panic_any(LogFatal)
    }

    #[track_caller]
    pub fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.log_args(Severity::Fatal, args, Location::caller());
        std::panic::panic_any(LogFatal)
    }

    #[track_caller]
    pub fn err(&self, values: &[&dyn Display]) {
        self.log_values(Severity::Error, values, Location::caller());
    }

    #[track_caller]
    pub fn errf(&self, args: Arguments<'_>) {
        self.log_args(Severity::Error, args, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, values: &[&dyn Display]) {
        self.log_values(Severity::Warn, values, Location::caller());
    }

    #[track_caller]
    pub fn warnf(&self, args: Arguments<'_>) {
        self.log_args(Severity::Warn, args, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.log_values(Severity::Info, values, Location::caller());
    }

    #[track_caller]
    pub fn infof(&self, args: Arguments<'_>) {
        self.log_args(Severity::Info, args, Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.log_values(Severity::Debug, values, Location::caller());
    }

    #[track_caller]
    pub fn debugf(&self, args: Arguments<'_>) {
        self.log_args(Severity::Debug, args, Location::caller());
    }

    #[track_caller]
    pub fn trace(&self, values: &[&dyn Display]) {
        self.log_values(Severity::Trace, values, Location::caller());
    }

    #[track_caller]
    pub fn tracef(&self, args: Arguments<'_>) {
        self.log_args(Severity::Trace, args, Location::caller());
    }

    fn log_values(&self, severity: Severity, values: &[&dyn Display], location: &Location<'_>) {
        if !self.enabled(severity) {
            return;
        }
        self.write(severity, join_values(values), Caller::from(location));
    }

    fn log_args(&self, severity: Severity, args: Arguments<'_>, location: &Location<'_>) {
        if !self.enabled(severity) {
            return;
        }
        self.write(severity, format_message(args), Caller::from(location));
    }

    pub(crate) fn write(&self, severity: Severity, message: String, caller: Caller<'_>) {
        let record = LogRecord::new(severity, caller, message);
        self.sink.write_line(&record.render(self.colored));
    }
}
