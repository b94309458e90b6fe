// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

/// Forwards to `inner` and counts the bytes `inner` accepted. This is how the styled
/// writer reports the payload size without counting escape sequences.
#[derive(Debug)]
pub struct CountingWriter<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    count: usize,
}

impl<'a, W: Write + ?Sized> CountingWriter<'a, W> {
    pub fn new(inner: &'a mut W) -> Self { Self { inner, count: 0 } }

    #[must_use]
    pub fn count(&self) -> usize { self.count }
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let written = self.inner.write(buf)?;
        self.count += written;
        Ok(written)
    }

    fn flush(&mut self) -> Result<()> { self.inner.flush() }
}
