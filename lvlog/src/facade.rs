use log::{Log, Metadata, Record, SetLoggerError};
use lvlog_core::{Caller, Severity, format_message};

use crate::Logger;

/// Lets a [`Logger`] back the `log` crate macros.
///
/// The location comes from the record; the facade has no fatal level, so
/// nothing raised through it ever unwinds.
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::enabled(self, Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let severity = Severity::from(record.level());
        if !Logger::enabled(self, severity) {
            return;
        }
        let caller = Caller::new(record.file(), record.line());
        self.write(severity, format_message(*record.args()), caller);
    }

    fn flush(&self) {
        self.sink.flush();
    }
}

impl Logger {
    /// Installs this logger as the global `log` backend.
    pub fn init_global(self) -> Result<(), SetLoggerError> {
        let filter = self.threshold.level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffered_logger;

    #[test]
    fn test_records_are_filtered_and_written() {
        let (logger, buffer) = buffered_logger(Severity::Warn);
        logger.log(
            &Record::builder()
                .args(format_args!("via facade {}", 1))
                .level(log::Level::Warn)
                .file(Some("src/facade.rs"))
                .line(Some(12))
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(log::Level::Info)
                .build(),
        );
        assert!(
            buffer
                .contents()
                .ends_with(" |WARN| src/facade.rs:12: via facade 1\n")
        );
        assert_eq!(buffer.contents().lines().count(), 1);
    }

    #[test]
    fn test_missing_location_still_writes() {
        let (logger, buffer) = buffered_logger(Severity::Info);
        logger.log(
            &Record::builder()
                .args(format_args!("nowhere"))
                .level(log::Level::Error)
                .build(),
        );
        assert!(buffer.contents().ends_with(" |ERR| :0: nowhere\n"));
    }

    #[test]
    fn test_enabled_uses_threshold() {
        let (logger, _) = buffered_logger(Severity::Debug);
        let metadata = |level| Metadata::builder().level(level).build();
        assert!(Log::enabled(&logger, &metadata(log::Level::Debug)));
        assert!(!Log::enabled(&logger, &metadata(log::Level::Trace)));
    }
}
