use std::fmt::{self, Display, Write};

use chrono::{DateTime, Local};

use crate::{error::Diagnostic, severity::Severity};

/// Timestamp layout at the head of every line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source location of a logging call, as far as it could be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: Option<&'a str>,
    pub line: Option<u32>,
}

impl<'a> Caller<'a> {
    pub fn new(file: Option<&'a str>, line: Option<u32>) -> Self {
        Self { file, line }
    }

    pub fn is_resolved(&self) -> bool {
        self.file.is_some() && self.line.is_some()
    }
}

impl<'a> From<&'a std::panic::Location<'a>> for Caller<'a> {
    fn from(location: &'a std::panic::Location<'a>) -> Self {
        Self::new(Some(location.file()), Some(location.line()))
    }
}

/// One line about to be written. Built per call and dropped once written.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub file: &'a str,
    pub line: u32,
    pub message: String,
}

impl<'a> LogRecord<'a> {
    /// Stamps the record with the current local time.
    ///
    /// Missing location data is reported on stderr and replaced by `""` / `0`.
    pub fn new(severity: Severity, caller: Caller<'a>, message: String) -> Self {
        if !caller.is_resolved() {
            Diagnostic::CallerResolutionFailed.report();
        }
        Self {
            timestamp: Local::now(),
            severity,
            file: caller.file.unwrap_or_default(),
            line: caller.line.unwrap_or_default(),
            message,
        }
    }

    /// Assembles `<timestamp> |<LABEL>| <file>:<line>: <message>` and
    /// terminates it with a newline unless the message already ends with one.
    pub fn render(&self, colored: bool) -> String {
        let time = self.timestamp.format(TIMESTAMP_FORMAT);
        let mut line = if colored {
            format_line(time, self.severity.colored_label(), self.file, self.line, &self.message)
        } else {
            format_line(time, self.severity.label(), self.file, self.line, &self.message)
        };
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

fn format_line(
    time: impl Display,
    label: impl Display,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    format!("{time} |{label}| {file}:{line}: {message}")
}

/// Joins values with single spaces, the way the plain logging operations build their message.
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        write!(message, "{value}").ok();
    }
    message
}

/// Renders the formatted operations' message.
pub fn format_message(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(s) => s.to_owned(),
        None => args.to_string(),
    }
}
