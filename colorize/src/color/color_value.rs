// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#Unix_environment_variables_relating_to_color_support>

use std::{fmt::{Display, Formatter, Result},
          sync::Arc};

use crate::{ColorCache, HexColorParseError};

/// A 24-bit color plus an alpha channel. Alpha is carried along (and takes part in
/// equality and caching) but terminals never see it.
///
/// Values are immutable. Use [`Color::from_rgb`], [`Color::from_rgba`] or
/// [`Color::from_hex`] to get a shared instance out of [`ColorCache::global()`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// The SGR parameter that selects what a color applies to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColorMode {
    Foreground = 38,
    Background = 48,
}

impl ColorMode {
    #[must_use]
    pub fn code(self) -> u8 { self as u8 }
}

impl Color {
    /// Build a bare value without going through the cache.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns the cached instance for `(red, green, blue, 0)`.
    #[must_use]
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Arc<Color> {
        ColorCache::global().lookup_rgba(red, green, blue, 0)
    }

    /// Returns the cached instance for `(red, green, blue, alpha)`.
    #[must_use]
    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Arc<Color> {
        ColorCache::global().lookup_rgba(red, green, blue, alpha)
    }

    /// Parse `#RGB` or `#RRGGBB` and return the cached instance.
    ///
    /// # Errors
    ///
    /// See [`HexColorParseError`] for the ways `input` can be rejected.
    pub fn from_hex(input: &str) -> std::result::Result<Arc<Color>, HexColorParseError> {
        ColorCache::global().lookup_hex(input)
    }

    /// `#rrggbb`, lowercase and zero padded.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// `R, G, B` in decimal.
    #[must_use]
    pub fn rgb_string(&self) -> String {
        format!("{}, {}, {}", self.red, self.green, self.blue)
    }

    /// Value equality against a possibly absent color. Absent is never equal.
    #[must_use]
    pub fn equals(&self, other: Option<&Color>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// The extended color SGR fragment, eg: `38;2;255;0;0`. This has no `CSI` prefix
    /// and no `m` suffix, since [`crate::Style`] joins several fragments into one
    /// sequence.
    #[must_use]
    pub fn generate(&self, mode: ColorMode) -> String {
        format!(
            "{};2;{};{};{}",
            mode.code(),
            self.red,
            self.green,
            self.blue
        )
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::new(red, green, blue, 0) }
}

/// Renders `r.g.b.a`, which is also the form used in log output.
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}.{}.{}.{}", self.red, self.green, self.blue, self.alpha)
    }
}
