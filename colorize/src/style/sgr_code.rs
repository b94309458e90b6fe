// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::{Color, ColorMode, FontEffect};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";
pub const SGR_SEPARATOR: &str = ";";

/// `CSI 0 m`, the only reset this crate ever emits.
pub const SGR_RESET: &str = "\x1b[0m";

/// One parameter of a combined SGR sequence. A [`crate::Style`] turns into a list of
/// these, which are joined with [`SGR_SEPARATOR`] inside a single `CSI … m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrFragment {
    Color(Color, ColorMode),
    Font(FontEffect),
}

impl Display for SgrFragment {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SgrFragment::Color(color, mode) => write!(f, "{}", color.generate(*mode)),
            SgrFragment::Font(font_effect)  => write!(f, "{font_effect}"),
        }
    }
}

/// Join `fragments` into `CSI f1;f2;… m`. No fragments means no sequence at all, so the
/// result is empty rather than a bare `CSI m` (which terminals read as a reset).
#[must_use]
pub fn sgr_sequence(fragments: &[SgrFragment]) -> String {
    if fragments.is_empty() {
        return String::new();
    }

    let joined = fragments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SGR_SEPARATOR);

    format!("{CSI}{joined}{SGR}")
}
