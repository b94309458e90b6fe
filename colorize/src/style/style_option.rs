// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Composable options for building a [`Style`] (and optionally pinning color on or off)
//! when a [`crate::Colorable`] is created.
//!
//! ```rust
//! use r3bl_colorize::{Color, Colorable, with_bold, with_color_enabled, with_foreground};
//!
//! let colorable = Colorable::new_with_options(
//!     Vec::<u8>::new(),
//!     [
//!         with_color_enabled(true),
//!         with_foreground(Color::from_rgb(255, 0, 0)),
//!         with_bold(),
//!     ],
//! );
//! assert_eq!(colorable.render("hi"), "\x1b[38;2;255;0;0;1mhi\x1b[0m");
//! ```

use std::sync::Arc;

use crate::{Color, FontEffect, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOption {
    /// Pins the writer's enablement override.
    ColorEnabled(bool),
    Foreground(Arc<Color>),
    Background(Arc<Color>),
    /// Appended to the fonts accumulated so far.
    Font(FontEffect),
    /// Replaces everything accumulated so far (except the enablement override).
    Style(Style),
}

#[must_use]
pub fn with_color_enabled(is_color_enabled: bool) -> StyleOption {
    StyleOption::ColorEnabled(is_color_enabled)
}

#[must_use]
pub fn with_foreground(color: Arc<Color>) -> StyleOption { StyleOption::Foreground(color) }

#[must_use]
pub fn with_background(color: Arc<Color>) -> StyleOption { StyleOption::Background(color) }

#[must_use]
pub fn with_bold() -> StyleOption { StyleOption::Font(FontEffect::Bold) }

#[must_use]
pub fn with_italic() -> StyleOption { StyleOption::Font(FontEffect::Italic) }

#[must_use]
pub fn with_underline() -> StyleOption { StyleOption::Font(FontEffect::Underline) }

#[must_use]
pub fn with_font(font_effect: FontEffect) -> StyleOption { StyleOption::Font(font_effect) }

#[must_use]
pub fn with_style(style: Style) -> StyleOption { StyleOption::Style(style) }

/// The result of folding a list of [`StyleOption`]s, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOptions {
    pub style: Style,
    pub color_enabled: Option<bool>,
}

impl StyleOptions {
    #[must_use]
    pub fn from_options(options: impl IntoIterator<Item = StyleOption>) -> Self {
        options
            .into_iter()
            .fold(Self::default(), |mut acc, option| {
                acc.apply(option);
                acc
            })
    }

    pub fn apply(&mut self, option: StyleOption) {
        match option {
            StyleOption::ColorEnabled(it) => self.color_enabled = Some(it),
            // Colors go back through the cache so equal colors share an instance.
            StyleOption::Foreground(color) => {
                self.style.foreground =
                    Some(Color::from_rgba(color.red, color.green, color.blue, color.alpha));
            }
            StyleOption::Background(color) => {
                self.style.background =
                    Some(Color::from_rgba(color.red, color.green, color.blue, color.alpha));
            }
            StyleOption::Font(font_effect) => self.style.fonts.push(font_effect),
            StyleOption::Style(style) => self.style = style,
        }
    }
}
