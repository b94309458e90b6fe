// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The styled writer, and the named color shorthands built on top of it.

// Attach.
mod colorable;
mod counting_writer;
mod direct_color;

// Re-export.
pub use colorable::*;
pub use counting_writer::*;
pub use direct_color::*;
