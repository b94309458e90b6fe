// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::File,
          io::{Cursor, IsTerminal, Stderr, StderrLock, Stdout, StdoutLock, Write}};

/// A [`Write`] sink that knows whether it wants color when nothing else decides. This is
/// looked at exactly once, when a [`crate::Colorable`] is created, and the answer is
/// frozen into its [`crate::ColorPolicy`].
///
/// - In-memory buffers say yes, so output captured in tests is deterministic.
/// - Stdout, stderr and files say yes only if they are a terminal.
///   [`IsTerminal`] also recognizes MSYS / Cygwin ptys on Windows.
///
/// For any other [`Write`] implementation use [`crate::Colorable::with_default`] and
/// pass the default explicitly.
pub trait ColorSink: Write {
    fn default_color_enabled(&self) -> bool;
}

impl ColorSink for Vec<u8> {
    fn default_color_enabled(&self) -> bool { true }
}

impl ColorSink for Cursor<Vec<u8>> {
    fn default_color_enabled(&self) -> bool { true }
}

impl ColorSink for Cursor<&mut Vec<u8>> {
    fn default_color_enabled(&self) -> bool { true }
}

impl ColorSink for Stdout {
    fn default_color_enabled(&self) -> bool { log_probe("stdout", self.is_terminal()) }
}

impl ColorSink for StdoutLock<'_> {
    fn default_color_enabled(&self) -> bool { log_probe("stdout", self.is_terminal()) }
}

impl ColorSink for Stderr {
    fn default_color_enabled(&self) -> bool { log_probe("stderr", self.is_terminal()) }
}

impl ColorSink for StderrLock<'_> {
    fn default_color_enabled(&self) -> bool { log_probe("stderr", self.is_terminal()) }
}

impl ColorSink for File {
    fn default_color_enabled(&self) -> bool { log_probe("file", self.is_terminal()) }
}

impl<T: ColorSink + ?Sized> ColorSink for &mut T {
    fn default_color_enabled(&self) -> bool { (**self).default_color_enabled() }
}

impl<T: ColorSink + ?Sized> ColorSink for Box<T> {
    fn default_color_enabled(&self) -> bool { (**self).default_color_enabled() }
}

fn log_probe(sink: &'static str, is_terminal: bool) -> bool {
    tracing::debug!(message = "tty probe", sink, is_terminal);
    is_terminal
}
