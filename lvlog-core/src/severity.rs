use std::{fmt, str::FromStr};

use colored::Color;
use log::{Level, LevelFilter};

use crate::error::Error;

/// Severity of a log line. `Fatal` is the most severe and has the smallest ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    Fatal = 1,
    Error = 2,
    Warn = 3,
    #[default]
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Label written between the pipes of a log line.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    fn color(self) -> Color {
        match self {
            Severity::Fatal => Color::BrightRed,
            Severity::Error => Color::Red,
            Severity::Warn => Color::Yellow,
            Severity::Info => Color::Green,
            Severity::Debug => Color::Blue,
            Severity::Trace => Color::Magenta,
        }
    }

    /// Label wrapped in ANSI color escapes.
    ///
    /// Always colored: the sink is not necessarily the terminal `colored` probes
    /// for, so its `NO_COLOR`/tty detection does not apply here.
    pub(crate) fn colored_label(self) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.color().to_fg_str(), self.label())
    }

    /// Whether a call at `call` severity passes a logger configured with `self` as threshold.
    pub fn permits(self, call: Severity) -> bool {
        self >= call
    }

    /// Closest `log` facade filter. The facade has no fatal level, so `Fatal` maps to `Error`.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Fatal | Severity::Error => LevelFilter::Error,
            Severity::Warn => LevelFilter::Warn,
            Severity::Info => LevelFilter::Info,
            Severity::Debug => LevelFilter::Debug,
            Severity::Trace => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for Severity {
    type Error = Error;

    fn try_from(ordinal: i64) -> Result<Self, Error> {
        match ordinal {
            1 => Ok(Severity::Fatal),
            2 => Ok(Severity::Error),
            3 => Ok(Severity::Warn),
            4 => Ok(Severity::Info),
            5 => Ok(Severity::Debug),
            6 => Ok(Severity::Trace),
            other => Err(Error::InvalidLevel(other)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Error> {
        Severity::try_from(i64::from(ordinal))
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ordinal) = s.parse::<i64>() {
            return Severity::try_from(ordinal);
        }
        match s.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Severity::Fatal),
            "err" | "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warn,
            Level::Info => Severity::Info,
            Level::Debug => Severity::Debug,
            Level::Trace => Severity::Trace,
        }
    }
}
