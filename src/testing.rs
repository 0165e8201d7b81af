//! Test doubles shared by the unit tests.

use std::fmt;
use std::io::{self, Write};

/// A destination that refuses every write.
#[derive(Default)]
pub struct FailingWriter {
    attempts: usize,
}

impl FailingWriter {
    /// How many times a write or flush has been attempted.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "destination is closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "destination is closed"))
    }
}

/// A `Display` implementation that renders `partial` and then fails.
pub struct FailingDisplay;

impl fmt::Display for FailingDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("partial")?;
        Err(fmt::Error)
    }
}
