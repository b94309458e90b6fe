// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Deciding whether escape sequences should be emitted at all.

// Attach.
mod color_enabled_policy;
mod color_sink;
pub mod global_color_enabled;

// Re-export.
pub use color_enabled_policy::*;
pub use color_sink::*;
