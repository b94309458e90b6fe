// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, ErrorKind, Write},
          ops::Range};

use crate::ColorSink;

/// A sink that fails the write calls whose zero based index falls in `failing_calls`
/// with `error_kind`, and accepts all others. Used to check that I/O errors reach the
/// caller.
#[derive(Debug, Clone)]
pub struct FailingWriter {
    pub error_kind: ErrorKind,
    pub failing_calls: Range<usize>,
    pub write_calls: usize,
    pub written: Vec<u8>,
}

impl FailingWriter {
    /// Fails every write.
    #[must_use]
    pub fn new(error_kind: ErrorKind) -> Self { Self::failing_after(error_kind, 0) }

    /// Accepts `succeed_count` writes, then fails every write after that.
    #[must_use]
    pub fn failing_after(error_kind: ErrorKind, succeed_count: usize) -> Self {
        Self::failing_calls(error_kind, succeed_count..usize::MAX)
    }

    /// Fails the first `reject_count` writes, then accepts every write after that.
    #[must_use]
    pub fn rejecting_first(error_kind: ErrorKind, reject_count: usize) -> Self {
        Self::failing_calls(error_kind, 0..reject_count)
    }

    #[must_use]
    pub fn failing_calls(error_kind: ErrorKind, failing_calls: Range<usize>) -> Self {
        Self {
            error_kind,
            failing_calls,
            write_calls: 0,
            written: Vec::new(),
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let call = self.write_calls;
        self.write_calls += 1;
        if self.failing_calls.contains(&call) {
            return Err(io::Error::new(self.error_kind, "FailingWriter refused write"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl ColorSink for FailingWriter {
    fn default_color_enabled(&self) -> bool { true }
}
