// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints a styled banner, the named colors, and a palette of RGB samples.
//!
//! ```text
//! cargo run --example demo
//! cargo run --example demo -- --no-color
//! cargo run --example demo -- --log-level debug
//! NO_COLOR=1 cargo run --example demo
//! ```

use std::io::{Write, stdout};

use clap::Parser;
use miette::IntoDiagnostic as _;
use r3bl_colorize::{Color, Colorable, FontEffect, Style, StyleOption, TracingConfig,
                    WriterConfig, black, blue, cyan, gray, green, magenta, orange,
                    purple, red, stdout_policy, try_initialize_logging_global, white,
                    with_background, with_bold, with_color_enabled, with_foreground,
                    with_italic, with_underline, yellow};
use tracing_core::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[arg(long = "no-color", help = "Disable color output")]
    no_color: bool,
    #[arg(
        long = "log-level",
        default_value = "off",
        help = "Log level for diagnostics written to stderr (off, error, warn, info, debug, trace)"
    )]
    log_level: LevelFilter,
    #[arg(long = "columns", default_value_t = 8, help = "Palette samples per row")]
    columns: usize,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    try_initialize_logging_global(TracingConfig::new(cli.log_level, WriterConfig::Stderr))?;
    tracing::debug!(message = "demo starting", cli = ?cli);

    if cli.no_color {
        stdout_policy().disable();
    }

    let mut options: Vec<StyleOption> = vec![
        with_foreground(Color::from_rgb(218, 44, 128)),
        with_background(Color::from_hex("#81BEF3")?),
        with_bold(),
        with_italic(),
        with_underline(),
    ];
    if cli.no_color {
        options.push(with_color_enabled(false));
    }
    let mut colorable = Colorable::new_with_options(stdout().lock(), options);

    print_banner(&mut colorable).into_diagnostic()?;
    print_named_colors();
    print_palette(&mut colorable, cli.columns.max(1)).into_diagnostic()?;

    Ok(())
}

fn print_banner(colorable: &mut Colorable<impl Write>) -> std::io::Result<()> {
    let banner_style = colorable.applied_style().clone();
    colorable.set_style(banner_style)?;
    colorable.get_mut().write_all(b"Output will be styled.\nTill next reset!")?;
    colorable.reset()?;
    colorable.get_mut().write_all(b"\nNormal text.\n")?;

    colorable.apply_style(Style::foreground_rgb(255, 188, 88).font(FontEffect::Bold));
    let stylish = {
        let render = colorable.render_fn();
        render(&"I am stylish!")
    };
    writeln!(colorable.get_mut(), "{stylish}")
}

fn print_named_colors() {
    for line in [
        black("Text in Black!"),
        blue("Deep Blue C!"),
        cyan("Hi Cyan!"),
        gray("Gray logged text!"),
        green("50 shades of Green!"),
        magenta("Go Magenta!"),
        orange("Orange is the new black!"),
        purple("The Purple hurdle!"),
        red("The thin Red light!"),
        white("Twice White!"),
        yellow("Hello Yellow!"),
    ] {
        println!("{line}");
    }
}

fn print_palette(colorable: &mut Colorable<impl Write>, columns: usize) -> std::io::Result<()> {
    colorable.apply_style(Style::foreground_rgb(188, 81, 188));
    colorable.println("\nSample colors in hex and RGB")?;
    colorable.println("====================================")?;

    for (position, index) in (0..=u8::MAX).enumerate() {
        let color = Color::from_rgb(index.wrapping_add(5), index.wrapping_mul(3), u8::MAX - index);
        colorable.apply_style(Style::default().fg(color.clone()));
        write!(colorable, "{} ({:<13})  ", color.hex(), color.rgb_string())?;
        if (position + 1) % columns == 0 {
            colorable.get_mut().write_all(b"\n")?;
        }
    }
    colorable.get_mut().write_all(b"\n")?;
    colorable.get_mut().flush()
}
