// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Immutable RGB(A) color values, the process-wide cache that hands them out, and the
//! hex color parser that feeds it.

// Attach.
mod color_cache;
mod color_value;
mod hex_color_parser;

// Re-export.
pub use color_cache::*;
pub use color_value::*;
pub use hex_color_parser::*;
