// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          sync::Arc};

use smallvec::SmallVec;

use crate::{Color, ColorMode, FontEffect, SGR_RESET, SgrFragment, sgr_sequence};

pub mod sizing {
    use super::{FontEffect, SgrFragment, SmallVec};

    /// Most styles carry one or two font effects.
    pub const MAX_INLINE_FONT_EFFECTS: usize = 4;
    pub type InlineVecFontEffects = SmallVec<[FontEffect; MAX_INLINE_FONT_EFFECTS]>;

    /// Foreground, background, plus the inline font effects.
    pub const MAX_INLINE_SGR_FRAGMENTS: usize = 2 + MAX_INLINE_FONT_EFFECTS;
    pub type InlineVecSgrFragments = SmallVec<[SgrFragment; MAX_INLINE_SGR_FRAGMENTS]>;
}
pub use sizing::InlineVecFontEffects;

/// What to apply to a piece of text: an optional foreground color, an optional background
/// color, and a list of font effects.
///
/// A style is a value. "Changing" the style of a [`crate::Colorable`] means handing it a
/// new one.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_colorize::{Color, FontEffect, Style};
///
/// let style = Style::default()
///     .fg(Color::from_rgb(0, 255, 0))
///     .font(FontEffect::Bold);
/// assert_eq!(style.format(), "\x1b[38;2;0;255;0;1m");
/// assert_eq!(style.reset_format(), "\x1b[0m");
/// assert_eq!(Style::default().format(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub foreground: Option<Arc<Color>>,
    pub background: Option<Arc<Color>>,
    pub fonts: InlineVecFontEffects,
}

impl Style {
    /// A style with only a (cached) foreground color.
    #[must_use]
    pub fn foreground_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            foreground: Some(Color::from_rgb(red, green, blue)),
            ..Default::default()
        }
    }

    /// A style with only a (cached) background color.
    #[must_use]
    pub fn background_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            background: Some(Color::from_rgb(red, green, blue)),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn fg(mut self, color: impl Into<Arc<Color>>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<Arc<Color>>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Appends `font_effect`, order is preserved in the rendered sequence.
    #[must_use]
    pub fn font(mut self, font_effect: FontEffect) -> Self {
        self.fonts.push(font_effect);
        self
    }

    /// No foreground, no background, no font effects.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.fonts.is_empty()
    }

    /// Fragments in wire order: foreground, background, then fonts as supplied.
    #[must_use]
    pub fn sgr_fragments(&self) -> sizing::InlineVecSgrFragments {
        let mut acc = sizing::InlineVecSgrFragments::new();
        if let Some(color) = &self.foreground {
            acc.push(SgrFragment::Color(**color, ColorMode::Foreground));
        }
        if let Some(color) = &self.background {
            acc.push(SgrFragment::Color(**color, ColorMode::Background));
        }
        acc.extend(self.fonts.iter().copied().map(SgrFragment::Font));
        acc
    }

    /// The combined escape sequence, eg: `\x1b[38;2;0;0;0;48;2;255;0;255;1m`. A void
    /// style renders to an empty string.
    #[must_use]
    pub fn format(&self) -> String { sgr_sequence(&self.sgr_fragments()) }

    /// Always `\x1b[0m`, whatever was applied.
    #[must_use]
    pub fn reset_format(&self) -> &'static str { SGR_RESET }

    /// Colors are compared by value, an absent color only equals another absent one.
    /// Font effects are compared as a set, but the number of entries has to match, so
    /// `[Bold, Italic]` equals `[Italic, Bold]` while `[Bold]` does not equal
    /// `[Bold, Bold]`.
    #[must_use]
    pub fn equals(&self, other: &Style) -> bool {
        self.foreground == other.foreground
            && self.background == other.background
            && self.fonts.len() == other.fonts.len()
            && self.fonts.iter().all(|it| other.fonts.contains(it))
            && other.fonts.iter().all(|it| self.fonts.contains(it))
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool { self.equals(other) }
}

impl Eq for Style {}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.format()) }
}
