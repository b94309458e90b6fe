// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{TracingConfig, WriterConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Log lines
/// are never colored, so they can't interleave escape sequences with styled output.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber built from `tracing_config`. Libraries and tests should
/// not call this, use [`try_create_layers`] with [`tracing::subscriber::with_default`]
/// instead.
///
/// # Errors
///
/// If a global subscriber has already been installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    match try_create_layers(tracing_config)? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

/// Returns the layers, or `None` if logging is turned off. This does not initialize the
/// tracing system.
///
/// # Errors
///
/// Reserved for writer configurations that can fail to open.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    if level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    let Some(display_layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())?
    else {
        return Ok(None);
    };

    let layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
        vec![Box::new(level_filter), display_layer];

    Ok(Some(layers))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Reserved for writer configurations that can fail to open.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::Stdout => Some(Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        )),
        WriterConfig::Stderr => Some(Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        WriterConfig::Mock(stdout_mock) => {
            let tracing_writer = move || stdout_mock.clone();
            Some(Box::new(
                fmt_layer
                    .with_writer(tracing_writer)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}
