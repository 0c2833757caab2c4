use std::{
    fmt,
    fs::File,
    io::{self, Write},
    path::Path,
    sync::{Mutex, PoisonError},
};

use crate::error::{Diagnostic, Error};

/// Destination of rendered lines.
///
/// Lines are written whole while holding the lock, so callers on different
/// threads never interleave partial lines.
pub struct LogSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl LogSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Opens `path` for appending, creating it if needed.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    /// Writes `line` with a single `write` call.
    ///
    /// Failures and short writes are reported on stderr and otherwise ignored.
    pub fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        match writer.write(line.as_bytes()) {
            Ok(written) if written != line.len() => Diagnostic::ShortWrite {
                expected: line.len(),
                written,
            }
            .report(),
            Ok(_) => {}
            Err(err) => {
                Diagnostic::SinkWriteFailed(err).report();
                return;
            }
        }
        if let Err(err) = writer.flush() {
            Diagnostic::SinkWriteFailed(err).report();
        }
    }

    pub fn flush(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writer.flush() {
            Diagnostic::SinkWriteFailed(err).report();
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").finish_non_exhaustive()
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Failing {
        flushes: Arc<Mutex<usize>>,
    }

    impl Write for Failing {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            *self.flushes.lock().unwrap() += 1;
            Err(io::Error::other("sink closed"))
        }
    }

    struct Short;

    impl Write for Short {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len() / 2)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line() {
        let buffer = Buffer::default();
        let sink = LogSink::new(buffer.clone());
        sink.write_line("Hello, world!\n");
        sink.write_line("rust is awesome !\n");
        assert_eq!(
            String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap(),
            "Hello, world!\nrust is awesome !\n"
        );
    }

    #[test]
    fn test_failing_and_short_writes_are_swallowed() {
        LogSink::new(Failing::default()).write_line("lost\n");
        LogSink::new(Short).write_line("half lost\n");
    }

    #[test]
    fn test_failed_write_skips_flush() {
        let failing = Failing::default();
        let sink = LogSink::new(failing.clone());
        sink.write_line("lost\n");
        sink.write_line("lost again\n");
        assert_eq!(*failing.flushes.lock().unwrap(), 0);
    }

    #[test]
    fn test_log_file_open_error() {
        let path = std::env::temp_dir().join("lvlog_missing_dir").join("nested").join("x.log");
        assert!(matches!(LogSink::file(path), Err(Error::Io(_))));
    }

    #[test]
    fn test_log_file_appends() {
        let path = std::env::temp_dir().join("lvlog_test_sink_file.log");
        std::fs::remove_file(&path).ok();
        LogSink::file(&path).unwrap().write_line("first\n");
        LogSink::file(&path).unwrap().write_line("second\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_concurrent_lines_stay_whole() {
        let buffer = Buffer::default();
        let sink = Arc::new(LogSink::new(buffer.clone()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    for j in 0..50 {
                        sink.write_line(&format!("thread {i} line {j}\n"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let content = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(content.lines().count(), 400);
        assert!(content.lines().all(|l| l.starts_with("thread ") && l.contains(" line ")));
    }
}
