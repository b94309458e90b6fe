// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] so a failing comparison of two rendered
/// escape strings shows a readable diff. Works in crates that don't depend on
/// `pretty_assertions` themselves.
///
/// ```rust
/// use r3bl_colorize::{Style, assert_eq2};
///
/// assert_eq2!(Style::foreground_rgb(1, 2, 3).format(), "\x1b[38;2;1;2;3m");
/// ```
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        $crate::pretty_assertions::assert_eq!($($params)*)
    };
}
