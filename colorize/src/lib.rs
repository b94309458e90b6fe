// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_colorize
//!
//! Turn RGB colors and font effects into 24-bit ("truecolor") ANSI escape sequences, and
//! print text wrapped in them. Styling is only emitted when the output actually wants it:
//! `NO_COLOR`, `TERM=dump`, redirected output, and explicit enable / disable calls are
//! all taken into account.
//!
//! # Table of contents
//!
//! - [Quick start](#quick-start)
//! - [Escape sequence format](#escape-sequence-format)
//! - [When is color emitted?](#when-is-color-emitted)
//! - [Testing](#testing)
//!
//! # Quick start
//!
//! ```rust
//! use r3bl_colorize::{Color, Colorable, FontEffect, Style};
//!
//! // Colors are cached, so asking for the same channels twice returns the same `Arc`.
//! let green = Color::from_rgb(0, 255, 0);
//! let style = Style::default().fg(green).font(FontEffect::Bold);
//!
//! // `Vec<u8>` is an in-memory sink, so color is on by default (unless `NO_COLOR` or
//! // `TERM=dump` is set).
//! let mut colorable = Colorable::new(Vec::<u8>::new());
//! colorable.enable_color();
//! colorable.apply_style(style);
//! assert_eq!(
//!     colorable.render("hello"),
//!     "\x1b[38;2;0;255;0;1mhello\x1b[0m"
//! );
//! ```
//!
//! # Escape sequence format
//!
//! A [`Style`] renders to exactly one SGR sequence: `ESC [ <fragments> m`. Fragments are
//! emitted in a fixed order, foreground (`38;2;R;G;B`), then background (`48;2;R;G;B`),
//! then every [`FontEffect`] code in the order it was supplied. The reset sequence is
//! always `ESC [ 0 m`. A style with nothing set (a "void" style) renders to the empty
//! string and [`Colorable`] never wraps text in it.
//!
//! # When is color emitted?
//!
//! [`ColorPolicy::is_color_enabled`] answers this for every write, in this order:
//! 1. The writer's own override ([`Colorable::enable_color`] /
//!    [`Colorable::disable_color`]).
//! 2. The process-wide override in [`global_color_enabled`].
//! 3. `NO_COLOR` is present in the environment (any value) → disabled.
//! 4. `TERM` is `dump` → disabled.
//! 5. The default frozen when the writer was created: on for in-memory buffers, on for
//!    stdout / stderr / files only if they are a terminal.
//!
//! # Testing
//!
//! Tests that touch environment variables or [`global_color_enabled`] must be annotated
//! with `#[serial]` from the [serial_test](https://crates.io/crates/serial_test) crate.
//! The [`StdoutMock`] fixture is an in-memory sink you can clone and inspect.

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod decl_macros;
pub mod log;
pub mod policy;
pub mod style;
pub mod test_fixtures;
pub mod writer;

// Re-export.
pub use color::*;
pub use log::*;
pub use policy::*;
pub use style::*;
pub use test_fixtures::*;
pub use writer::*;

// Used by `assert_eq2!`.
#[doc(hidden)]
pub use pretty_assertions;
