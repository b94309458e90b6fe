// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process wide color on / off switch. It sits between a writer's own override and the
//! environment variables in the precedence used by
//! [`ColorPolicy::is_color_enabled`](crate::ColorPolicy::is_color_enabled).
//!
//! # Testing support
//!
//! Any test that calls [`set_override`] must be annotated with `#[serial]` from the
//! [serial_test](https://crates.io/crates/serial_test) crate, and must call
//! [`clear_override`] before returning. Otherwise tests running in parallel will see
//! each other's value.

use std::sync::atomic::{AtomicI8, Ordering};

use crate::EnablementState;

static COLOR_ENABLED_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

const NOT_SET_VALUE: i8 = -1;

/// Force color on (`true`) or off (`false`) for every writer that has not been
/// explicitly enabled or disabled itself.
pub fn set_override(enabled: bool) {
    let it = i8::from(EnablementState::from(enabled));
    COLOR_ENABLED_GLOBAL.store(it, Ordering::Release);
    tracing::debug!(message = "global color override set", enabled);
}

/// Go back to deciding from the environment.
pub fn clear_override() {
    COLOR_ENABLED_GLOBAL.store(NOT_SET_VALUE, Ordering::Release);
    tracing::debug!(message = "global color override cleared");
}

/// Get the override value.
/// - If it was set using [`set_override`] then that value is returned.
/// - Otherwise an error is returned.
///
/// # Errors
///
/// Returns `Err(())` if no override value has been set.
#[allow(clippy::result_unit_err)]
pub fn try_get_override() -> Result<bool, ()> {
    let it = COLOR_ENABLED_GLOBAL.load(Ordering::Acquire);
    match EnablementState::from(it) {
        EnablementState::Enabled => Ok(true),
        EnablementState::Disabled => Ok(false),
        EnablementState::Unset => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_set_and_clear_override() {
        clear_override();
        assert_eq!(try_get_override(), Err(()));

        set_override(false);
        assert_eq!(try_get_override(), Ok(false));

        set_override(true);
        assert_eq!(try_get_override(), Ok(true));

        clear_override();
        assert_eq!(try_get_override(), Err(()));
    }
}
