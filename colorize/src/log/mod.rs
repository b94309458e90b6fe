// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional tracing subscriber setup. The library itself only emits `tracing` events,
//! binaries (and tests that want to see those events) install a subscriber with
//! [`try_initialize_logging_global`] or [`try_create_layers`].

// Attach.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
