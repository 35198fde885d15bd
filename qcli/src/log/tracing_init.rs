// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPreference, TracingConfig, WriterConfig, log::rolling_file_appender_impl};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber built from `tracing_config`. Returns `Ok(())` without
/// doing anything for [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can not be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    let Some(layers) = try_create_layers(tracing_config)? else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|error| {
            miette::miette!(
                code = "r3bl_qcli::log::already_initialized",
                "Could not install the tracing subscriber: {error}"
            )
        })
}

/// Install a subscriber for the current thread only, until the returned guard is
/// dropped. Returns [`None`] for [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can not be created.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<Option<tracing::subscriber::DefaultGuard>> {
    let Some(layers) = try_create_layers(tracing_config)? else {
        return Ok(None);
    };
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// Returns the layers without initializing anything, or [`None`] for
/// [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can not be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if tracing_config.writer_config == WriterConfig::None {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Layers without a filter of their own (if any get added) still respect the level.
    layers.push(Box::new(level_filter));

    if let Some(layer) = try_create_display_layer(level_filter, writer_config.clone()) {
        layers.push(layer);
    }
    if let Some(layer) = try_create_file_layer(level_filter, writer_config)? {
        layers.push(layer);
    }

    Ok(Some(layers))
}

/// Erases the concrete type of the writer, so the layer can be composed with others.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().compact().with_target(false);

    match writer_config {
        WriterConfig::DisplayAndFile(display_preference, _)
        | WriterConfig::Display(display_preference) => match display_preference {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer.with_writer(std::io::stdout).with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer.with_writer(std::io::stderr).with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// Erases the concrete type of the writer, so the layer can be composed with others.
///
/// # Errors
///
/// Returns an error if the log file can not be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(&file_path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
