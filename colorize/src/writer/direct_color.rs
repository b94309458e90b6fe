// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named color shorthands, eg: `red("error")`. They render to a [`String`] and decide
//! enablement with [`stdout_policy`], since the result usually ends up on stdout.
//!
//! ```rust
//! use r3bl_colorize::{green_bg, stdout_policy};
//!
//! stdout_policy().enable();
//! assert_eq!(green_bg("ok"), "\x1b[48;2;0;255;0mok\x1b[0m");
//! ```

use std::{fmt::Display,
          io::stdout,
          sync::LazyLock};

use super::colorable::render_wrapped;
use crate::{ColorPolicy, Style};

static STDOUT_POLICY: LazyLock<ColorPolicy> =
    LazyLock::new(|| ColorPolicy::for_sink(&stdout()));

/// Shared by all the named color functions. Its default is frozen from stdout's
/// terminal status on first use. Call [`ColorPolicy::disable`] on it to wire up a
/// `--no-color` flag.
#[must_use]
pub fn stdout_policy() -> &'static ColorPolicy { &STDOUT_POLICY }

fn render_on_stdout(style: &Style, payload: impl Display) -> String {
    let decorate = !style.is_void() && STDOUT_POLICY.is_color_enabled();
    render_wrapped(style, decorate, format_args!("{payload}"))
}

macro_rules! named_colors {
    ($($fg:ident, $bg:ident => ($red:literal, $green:literal, $blue:literal);)*) => {
        $(
            #[doc = concat!("`payload` with a ", stringify!($fg), " foreground.")]
            #[must_use]
            pub fn $fg(payload: impl Display) -> String {
                render_on_stdout(&Style::foreground_rgb($red, $green, $blue), payload)
            }

            #[doc = concat!("`payload` with a ", stringify!($fg), " background.")]
            #[must_use]
            pub fn $bg(payload: impl Display) -> String {
                render_on_stdout(&Style::background_rgb($red, $green, $blue), payload)
            }
        )*

        /// Name and RGB channels of every named color, in alphabetical order.
        pub const NAMED_COLORS: &[(&str, (u8, u8, u8))] =
            &[$((stringify!($fg), ($red, $green, $blue)),)*];
    };
}

#[rustfmt::skip]
named_colors! {
    black,   black_bg   => (0,   0,   0);
    blue,    blue_bg    => (0,   0,   255);
    cyan,    cyan_bg    => (0,   255, 255);
    gray,    gray_bg    => (128, 128, 128);
    green,   green_bg   => (0,   255, 0);
    magenta, magenta_bg => (255, 0,   255);
    orange,  orange_bg  => (255, 165, 0);
    purple,  purple_bg  => (128, 0,   128);
    red,     red_bg     => (255, 0,   0);
    white,   white_bg   => (255, 255, 255);
    yellow,  yellow_bg  => (255, 255, 0);
}
