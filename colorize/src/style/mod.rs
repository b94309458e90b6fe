// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod font_effect;
mod sgr_code;
mod style_descriptor;
mod style_option;

// Re-export.
pub use font_effect::*;
pub use sgr_code::*;
pub use style_descriptor::*;
pub use style_option::*;
