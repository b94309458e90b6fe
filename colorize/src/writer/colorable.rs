// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Display, Write as _},
          io::{self, Write}};

use crate::{ColorPolicy, ColorSink, CountingWriter, SGR_RESET, Style, StyleOption,
            StyleOptions};

/// Binds an output sink to a staged [`Style`] and a [`ColorPolicy`].
///
/// Every write wraps its payload in the staged style's escape sequence and the reset
/// sequence, but only when the policy says color is enabled and the style is not void.
/// Otherwise the payload is written exactly as the standard formatter would write it.
///
/// There are three families of operations:
/// 1. Own sink: [`Colorable::print`], [`Colorable::write_fmt`] (so `write!` works), and
///    [`Colorable::println`].
/// 2. Another sink: [`Colorable::write_to`], [`Colorable::write_fmt_to`], and
///    [`Colorable::write_line_to`].
/// 3. No sink: [`Colorable::render`], [`Colorable::render_fmt`], and
///    [`Colorable::render_line`] return a [`String`].
///
/// Writes return the number of payload bytes written. Escape bytes are not counted.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_colorize::{Colorable, FontEffect, Style};
///
/// let mut colorable = Colorable::new(Vec::<u8>::new());
/// colorable
///     .enable_color()
///     .apply_style(Style::foreground_rgb(0, 0, 0).font(FontEffect::Underline));
///
/// let count = write!(colorable, "{}+{}", 1, 2).unwrap();
/// assert_eq!(count, 3);
/// assert_eq!(
///     colorable.get_ref().as_slice(),
///     b"\x1b[38;2;0;0;0;4m1+2\x1b[0m"
/// );
/// ```
#[derive(Debug)]
pub struct Colorable<W: Write> {
    output: W,
    applied_style: Style,
    policy: ColorPolicy,
    /// [`Colorable::set_style`] wrote an escape sequence that no reset has closed yet.
    style_open: bool,
    /// [`Colorable::disable_color`] closed an open style that
    /// [`Colorable::enable_color`] should re-emit.
    should_preserve_style: bool,
}

impl<W: ColorSink> Colorable<W> {
    /// The default enablement is taken from `output` now and never recomputed.
    pub fn new(output: W) -> Self {
        let policy = ColorPolicy::for_sink(&output);
        Self::with_policy(output, policy)
    }

    /// Like [`Colorable::new`], then applies `options` in order.
    pub fn new_with_options(
        output: W,
        options: impl IntoIterator<Item = StyleOption>,
    ) -> Self {
        let StyleOptions {
            style,
            color_enabled,
        } = StyleOptions::from_options(options);
        let mut it = Self::new(output);
        match color_enabled {
            Some(true) => it.enable_color(),
            Some(false) => it.disable_color(),
            None => &mut it,
        }
        .apply_style(style);
        it
    }
}

impl<W: Write> Colorable<W> {
    /// For sinks that don't implement [`ColorSink`], the caller supplies the default.
    pub fn with_default(output: W, default_enabled: bool) -> Self {
        Self::with_policy(output, ColorPolicy::new(default_enabled))
    }

    pub fn with_policy(output: W, policy: ColorPolicy) -> Self {
        Self {
            output,
            applied_style: Style::default(),
            policy,
            style_open: false,
            should_preserve_style: false,
        }
    }

    pub fn applied_style(&self) -> &Style { &self.applied_style }

    pub fn policy(&self) -> &ColorPolicy { &self.policy }

    pub fn get_ref(&self) -> &W { &self.output }

    pub fn get_mut(&mut self) -> &mut W { &mut self.output }

    pub fn into_inner(self) -> W { self.output }

    /// Stage `style` for the writes that follow. Nothing is written.
    pub fn apply_style(&mut self, style: Style) -> &mut Self {
        self.applied_style = style;
        self
    }

    /// Write `style`'s escape sequence to the sink right away (if enabled and not void)
    /// and stage it. Pair with [`Colorable::reset`].
    ///
    /// # Errors
    ///
    /// Any error from writing to the sink. The style is staged only on success.
    pub fn set_style(&mut self, style: Style) -> io::Result<&mut Self> {
        if self.should_decorate(&style) {
            self.output.write_all(style.format().as_bytes())?;
            self.style_open = true;
        }
        self.applied_style = style;
        Ok(self)
    }

    /// Write the reset sequence to the sink right away, if color is enabled. A style
    /// closed by [`Colorable::disable_color`] is no longer re-emitted on enable.
    ///
    /// # Errors
    ///
    /// Any error from writing to the sink.
    pub fn reset(&mut self) -> io::Result<&mut Self> {
        self.should_preserve_style = false;
        if self.is_color_enabled() {
            self.output.write_all(self.applied_style.reset_format().as_bytes())?;
            self.style_open = false;
        }
        Ok(self)
    }

    /// If [`Colorable::disable_color`] closed a style opened by
    /// [`Colorable::set_style`], the staged style is written again so the output picks
    /// up where it left off.
    pub fn enable_color(&mut self) -> &mut Self {
        self.policy.enable();
        if std::mem::take(&mut self.should_preserve_style)
            && self.should_decorate(&self.applied_style)
        {
            match self.output.write_all(self.applied_style.format().as_bytes()) {
                Ok(()) => self.style_open = true,
                Err(error) => {
                    tracing::warn!(message = "could not restore style", error = ?error);
                }
            }
        }
        self
    }

    /// Useful to wire up a `--no-color` flag without touching the code that prints. A
    /// style opened by [`Colorable::set_style`] is closed with a reset first, so the
    /// plain output that follows isn't colored by it.
    pub fn disable_color(&mut self) -> &mut Self {
        if self.style_open && self.is_color_enabled() {
            if let Err(error) = self
                .output
                .write_all(self.applied_style.reset_format().as_bytes())
            {
                tracing::warn!(message = "could not close style", error = ?error);
            }
            self.style_open = false;
            self.should_preserve_style = true;
        }
        self.policy.disable();
        self
    }

    #[must_use]
    pub fn is_color_enabled(&self) -> bool { self.policy.is_color_enabled() }

    fn should_decorate(&self, style: &Style) -> bool {
        !style.is_void() && self.is_color_enabled()
    }

    /// # Errors
    ///
    /// Any error from writing the payload to the sink.
    pub fn print(&mut self, payload: impl Display) -> io::Result<usize> {
        self.write_fmt(format_args!("{payload}"))
    }

    /// This is what `write!(colorable, ..)` calls.
    ///
    /// # Errors
    ///
    /// Any error from writing the payload to the sink.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        let decorate = self.should_decorate(&self.applied_style);
        write_wrapped(&mut self.output, &self.applied_style, decorate, args)
    }

    /// The newline is written inside the styled region.
    ///
    /// # Errors
    ///
    /// Any error from writing the payload to the sink.
    pub fn println(&mut self, payload: impl Display) -> io::Result<usize> {
        self.write_fmt(format_args!("{payload}\n"))
    }

    /// Same as [`Colorable::print`] but to `sink`.
    ///
    /// # Errors
    ///
    /// Any error from writing the payload to `sink`.
    pub fn write_to(
        &self,
        sink: &mut (impl Write + ?Sized),
        payload: impl Display,
    ) -> io::Result<usize> {
        self.write_fmt_to(sink, format_args!("{payload}"))
    }

    /// Same as [`Colorable::write_fmt`] but to `sink`.
    ///
    /// # Errors
    ///
    /// Any error from writing the payload to `sink`.
    pub fn write_fmt_to(
        &self,
        sink: &mut (impl Write + ?Sized),
        args: fmt::Arguments<'_>,
    ) -> io::Result<usize> {
        let decorate = self.should_decorate(&self.applied_style);
        write_wrapped(sink, &self.applied_style, decorate, args)
    }

    /// Same as [`Colorable::println`] but to `sink`.
    ///
    /// # Errors
    ///
    /// Any error from writing the payload to `sink`.
    pub fn write_line_to(
        &self,
        sink: &mut (impl Write + ?Sized),
        payload: impl Display,
    ) -> io::Result<usize> {
        self.write_fmt_to(sink, format_args!("{payload}\n"))
    }

    #[must_use]
    pub fn render(&self, payload: impl Display) -> String {
        self.render_fmt(format_args!("{payload}"))
    }

    #[must_use]
    pub fn render_fmt(&self, args: fmt::Arguments<'_>) -> String {
        render_wrapped(&self.applied_style, self.should_decorate(&self.applied_style), args)
    }

    #[must_use]
    pub fn render_line(&self, payload: impl Display) -> String {
        self.render_fmt(format_args!("{payload}\n"))
    }

    /// A callback that renders with this writer's staged style and policy.
    ///
    /// ```rust
    /// use r3bl_colorize::{Colorable, Style};
    ///
    /// let mut colorable = Colorable::new(Vec::<u8>::new());
    /// colorable.disable_color().apply_style(Style::foreground_rgb(1, 2, 3));
    /// let render = colorable.render_fn();
    /// assert_eq!(render(&42), "42");
    /// ```
    pub fn render_fn(&self) -> impl Fn(&dyn Display) -> String + '_ {
        move |payload| self.render(payload)
    }
}

/// Escape sequence, payload, reset. The payload's result is returned as is. Errors from
/// writing either escape sequence are logged and dropped.
pub(crate) fn write_wrapped<S: Write + ?Sized>(
    sink: &mut S,
    style: &Style,
    decorate: bool,
    args: fmt::Arguments<'_>,
) -> io::Result<usize> {
    if decorate && let Err(error) = sink.write_all(style.format().as_bytes()) {
        tracing::warn!(message = "could not write escape sequence", error = ?error);
    }

    let mut counting = CountingWriter::new(sink);
    let result = counting.write_fmt(args).map(|()| counting.count());

    if decorate && let Err(error) = sink.write_all(SGR_RESET.as_bytes()) {
        tracing::warn!(
            message = "could not write reset sequence",
            error = ?error,
            payload_ok = result.is_ok()
        );
    }

    result
}

pub(crate) fn render_wrapped(
    style: &Style,
    decorate: bool,
    args: fmt::Arguments<'_>,
) -> String {
    let mut acc = String::new();
    if decorate {
        acc.push_str(&style.format());
    }
    // Writing into a String only fails if a Display impl reports an error.
    if let Err(error) = acc.write_fmt(args) {
        tracing::warn!(message = "payload formatting failed", error = ?error);
    }
    if decorate {
        acc.push_str(SGR_RESET);
    }
    acc
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::{Color, FailingWriter, FontEffect, StdoutMock, assert_eq2, with_bold,
                with_color_enabled, with_foreground, with_style};

    fn enabled_colorable(style: Style) -> Colorable<Vec<u8>> {
        let mut it = Colorable::new(Vec::new());
        it.enable_color().apply_style(style);
        it
    }

    #[test]
    fn test_render_black_foreground() {
        let colorable = enabled_colorable(Style::foreground_rgb(0, 0, 0));
        assert_eq2!(
            colorable.render("Output this in Black foreground color."),
            "\x1b[38;2;0;0;0mOutput this in Black foreground color.\x1b[0m"
        );
    }

    #[test]
    fn test_render_void_style_is_plain() {
        let colorable = enabled_colorable(Style::default());
        assert_eq2!(colorable.render("hello"), "hello");
        assert_eq2!(colorable.render_line("hello"), "hello\n");
    }

    #[test]
    fn test_render_disabled_is_plain() {
        let mut colorable =
            enabled_colorable(Style::foreground_rgb(255, 0, 0).font(FontEffect::Bold));
        colorable.disable_color();
        assert_eq2!(colorable.render("hello"), "hello");
        assert_eq2!(colorable.render_fmt(format_args!("{}!", 1)), "1!");
    }

    #[test]
    fn test_render_line_newline_is_inside() {
        let colorable = enabled_colorable(Style::foreground_rgb(0, 255, 0));
        assert_eq2!(
            colorable.render_line("go"),
            "\x1b[38;2;0;255;0mgo\n\x1b[0m"
        );
    }

    #[test]
    fn test_print_writes_to_own_sink() {
        let mut colorable = enabled_colorable(
            Style::foreground_rgb(0, 255, 0).font(FontEffect::Bold),
        );
        let count = colorable.print("hi").unwrap();
        assert_eq2!(count, 2);
        assert_eq2!(
            colorable.into_inner(),
            b"\x1b[38;2;0;255;0;1mhi\x1b[0m".to_vec()
        );
    }

    #[test]
    fn test_write_macro_and_println() {
        let mut colorable = enabled_colorable(Style::background_rgb(1, 2, 3));
        let count = write!(colorable, "{:>4}", 7).unwrap();
        assert_eq2!(count, 4);
        let count = colorable.println("x").unwrap();
        assert_eq2!(count, 2);
        assert_eq2!(
            String::from_utf8(colorable.into_inner()).unwrap(),
            "\x1b[48;2;1;2;3m   7\x1b[0m\x1b[48;2;1;2;3mx\n\x1b[0m"
        );
    }

    #[test]
    fn test_write_to_other_sink_leaves_own_sink_alone() {
        let colorable = enabled_colorable(Style::foreground_rgb(9, 9, 9));
        let mut other = StdoutMock::new();
        assert_eq2!(colorable.write_to(&mut other, "a").unwrap(), 1);
        assert_eq2!(colorable.write_line_to(&mut other, "b").unwrap(), 2);
        assert_eq2!(
            colorable.write_fmt_to(&mut other, format_args!("{}", 'c')).unwrap(),
            1
        );
        assert_eq2!(other.get_copy_of_buffer_as_string_strip_ansi(), "ab\nc");
        assert!(colorable.get_ref().is_empty());
    }

    #[test]
    fn test_set_style_writes_immediately_and_reset() {
        let mut colorable = Colorable::new(Vec::<u8>::new());
        colorable.enable_color();
        colorable
            .set_style(Style::foreground_rgb(0, 0, 255))
            .unwrap()
            .reset()
            .unwrap();
        assert_eq2!(
            colorable.get_ref().as_slice(),
            b"\x1b[38;2;0;0;255m\x1b[0m".as_slice()
        );
        assert_eq2!(colorable.applied_style(), &Style::foreground_rgb(0, 0, 255));
    }

    #[test]
    fn test_set_style_and_reset_when_disabled() {
        let mut colorable = Colorable::new(Vec::<u8>::new());
        colorable.disable_color();
        colorable.set_style(Style::foreground_rgb(0, 0, 255)).unwrap();
        colorable.reset().unwrap();
        assert!(colorable.get_ref().is_empty());
        assert_eq2!(colorable.applied_style(), &Style::foreground_rgb(0, 0, 255));
    }

    #[test]
    fn test_apply_style_writes_nothing() {
        let colorable = enabled_colorable(Style::foreground_rgb(0, 0, 0));
        assert!(colorable.get_ref().is_empty());
    }

    #[test]
    fn test_payload_error_propagates() {
        let mut colorable = Colorable::new(FailingWriter::failing_after(
            ErrorKind::BrokenPipe,
            1,
        ));
        colorable.enable_color().apply_style(Style::foreground_rgb(0, 0, 0));
        let error = colorable.print("payload").unwrap_err();
        assert_eq2!(error.kind(), ErrorKind::BrokenPipe);
        // Only the escape sequence made it.
        assert_eq2!(colorable.get_ref().written, b"\x1b[38;2;0;0;0m".to_vec());
    }

    #[test]
    fn test_dead_sink_reports_payload_error() {
        let mut colorable = Colorable::new(FailingWriter::new(ErrorKind::PermissionDenied));
        colorable.enable_color().apply_style(Style::foreground_rgb(0, 0, 0));
        let error = colorable.print("payload").unwrap_err();
        assert_eq2!(error.kind(), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_escape_error_does_not_stop_payload() {
        let mut colorable = Colorable::new(FailingWriter::rejecting_first(
            ErrorKind::PermissionDenied,
            1,
        ));
        colorable.enable_color().apply_style(Style::foreground_rgb(0, 0, 0));
        assert_eq2!(colorable.print("payload").unwrap(), 7);
        assert_eq2!(colorable.get_ref().written, b"payload\x1b[0m".to_vec());

        let mut other = FailingWriter::rejecting_first(ErrorKind::PermissionDenied, 1);
        assert_eq2!(colorable.write_line_to(&mut other, "x").unwrap(), 2);
        assert_eq2!(other.written, b"x\n\x1b[0m".to_vec());
    }

    #[test]
    fn test_disable_closes_open_style_and_enable_restores_it() {
        let mut colorable = Colorable::new(Vec::<u8>::new());
        colorable.enable_color();
        colorable.set_style(Style::foreground_rgb(255, 0, 0)).unwrap();
        colorable.disable_color();
        colorable.print("plain").unwrap();
        colorable.enable_color();
        colorable.print("red").unwrap();
        assert_eq2!(
            String::from_utf8(colorable.into_inner()).unwrap(),
            "\x1b[38;2;255;0;0m\x1b[0mplain\x1b[38;2;255;0;0m\x1b[38;2;255;0;0mred\x1b[0m"
        );
    }

    #[test]
    fn test_reset_while_disabled_drops_preserved_style() {
        let mut colorable = Colorable::new(Vec::<u8>::new());
        colorable.enable_color();
        colorable.set_style(Style::foreground_rgb(255, 0, 0)).unwrap();
        colorable.disable_color();
        colorable.print("plain").unwrap();
        colorable.reset().unwrap();
        colorable.enable_color();
        assert_eq2!(
            colorable.get_ref().as_slice(),
            b"\x1b[38;2;255;0;0m\x1b[0mplain".as_slice()
        );
    }

    #[test]
    fn test_toggling_without_open_style_writes_nothing() {
        let mut colorable = enabled_colorable(Style::foreground_rgb(255, 0, 0));
        colorable.disable_color().enable_color();
        colorable.set_style(Style::foreground_rgb(0, 0, 1)).unwrap();
        colorable.reset().unwrap();
        colorable.disable_color().enable_color();
        assert_eq2!(
            colorable.get_ref().as_slice(),
            b"\x1b[38;2;0;0;1m\x1b[0m".as_slice()
        );
    }

    #[test]
    fn test_reset_error_is_not_surfaced() {
        let mut colorable = Colorable::new(FailingWriter::failing_after(
            ErrorKind::BrokenPipe,
            2,
        ));
        colorable.enable_color().apply_style(Style::foreground_rgb(0, 0, 0));
        assert_eq2!(colorable.print("ok").unwrap(), 2);
    }

    #[test]
    fn test_new_with_options() {
        let colorable = Colorable::new_with_options(
            Vec::<u8>::new(),
            [
                with_color_enabled(true),
                with_foreground(Color::from_rgb(255, 0, 0)),
                with_bold(),
            ],
        );
        assert_eq2!(colorable.render("hi"), "\x1b[38;2;255;0;0;1mhi\x1b[0m");

        let colorable = Colorable::new_with_options(
            Vec::<u8>::new(),
            [with_bold(), with_style(Style::foreground_rgb(1, 1, 1)), with_color_enabled(false)],
        );
        assert_eq2!(colorable.applied_style(), &Style::foreground_rgb(1, 1, 1));
        assert!(!colorable.is_color_enabled());
    }

    #[test]
    fn test_render_fn() {
        let colorable = enabled_colorable(Style::foreground_rgb(0, 0, 0));
        let render = colorable.render_fn();
        assert_eq2!(render(&"x"), "\x1b[38;2;0;0;0mx\x1b[0m");
        assert_eq2!(render(&3.5), "\x1b[38;2;0;0;0m3.5\x1b[0m");
    }

    #[test]
    fn test_with_default_for_foreign_sink() {
        let mut buffer = [0_u8; 64];
        let mut colorable = Colorable::with_default(&mut buffer[..], false);
        colorable.enable_color();
        assert!(colorable.is_color_enabled());
        colorable.disable_color();
        assert!(!colorable.is_color_enabled());
        assert!(!colorable.policy().default_enabled());
    }
}
