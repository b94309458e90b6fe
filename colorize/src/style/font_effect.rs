// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

/// Font effects (SGR attributes other than color). The discriminant is the SGR code.
/// Some effects are not supported on all terminals.
///
/// More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum FontEffect {
    Normal = 0,
    Bold = 1,
    Faint = 2,
    Italic = 3,
    Underline = 4,
    BlinkSlow = 5,
    BlinkRapid = 6,
    ReverseVideo = 7,
    Concealed = 8,
    CrossedOut = 9,
}

impl FontEffect {
    #[must_use]
    pub fn code(self) -> u8 { self as u8 }
}

/// Renders the bare SGR code, eg: `1` for [`FontEffect::Bold`].
impl Display for FontEffect {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.code()) }
}
