use std::{
    io::{self, Write},
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{Arc, Mutex},
};

use lvlog_core::{LogFatal, Severity};

use crate::{Logger, logger_config};

/// In-memory sink shared between a logger and the test inspecting it.
#[derive(Clone, Default)]
pub(crate) struct Buffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    failing: bool,
}

impl Buffer {
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failing {
            return Err(io::Error::other("sink closed"));
        }
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn buffered_logger(threshold: Severity) -> (Logger, Buffer) {
    let buffer = Buffer::default();
    let logger = logger_config()
        .with_writer(buffer.clone())
        .with_level(threshold)
        .build()
        .unwrap();
    (logger, buffer)
}

/// Runs `f` and checks it unwinds with the fatal signal.
pub(crate) fn expect_fatal(f: impl FnOnce()) {
    let payload = catch_unwind(AssertUnwindSafe(f)).expect_err("expecting panic");
    assert_eq!(payload.downcast_ref::<LogFatal>(), Some(&LogFatal));
}
