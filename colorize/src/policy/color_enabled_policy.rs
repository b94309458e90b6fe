// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

use crate::{ColorSink, global_color_enabled};

/// When present in the environment (with any value, even empty) color is off.
pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_TERM: &str = "TERM";
/// Value of [`ENV_TERM`] that turns color off.
pub const TERM_DUMP: &str = "dump";

/// Tri-state held by an override slot. Stored in an [`AtomicI8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnablementState {
    Unset,
    Enabled,
    Disabled,
}

impl From<bool> for EnablementState {
    fn from(enabled: bool) -> Self {
        if enabled {
            EnablementState::Enabled
        } else {
            EnablementState::Disabled
        }
    }
}

impl From<EnablementState> for i8 {
    fn from(value: EnablementState) -> Self {
        match value {
            EnablementState::Unset => -1,
            EnablementState::Disabled => 0,
            EnablementState::Enabled => 1,
        }
    }
}

/// Anything that isn't `0` or `1` reads as [`EnablementState::Unset`].
impl From<i8> for EnablementState {
    fn from(value: i8) -> Self {
        match value {
            0 => EnablementState::Disabled,
            1 => EnablementState::Enabled,
            _ => EnablementState::Unset,
        }
    }
}

/// Which rule produced a [`ColorDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorDecisionSource {
    WriterOverride,
    GlobalOverride,
    NoColorEnv,
    DumpTerm,
    SinkDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorDecision {
    pub enabled: bool,
    pub source: ColorDecisionSource,
}

/// Decides, on every write, whether a writer emits escape sequences.
///
/// The first rule that applies wins:
/// 1. This policy's own override, set with [`ColorPolicy::enable`] or
///    [`ColorPolicy::disable`].
/// 2. The process wide override in [`global_color_enabled`].
/// 3. [`ENV_NO_COLOR`] is present: off.
/// 4. [`ENV_TERM`] is exactly [`TERM_DUMP`]: off.
/// 5. The default captured when the policy was created.
///
/// The environment is read each time a decision is made, so changes to it take effect
/// on the next write. The default is never recomputed.
///
/// The override is atomic so a shared policy can be flipped through `&self`.
#[derive(Debug)]
pub struct ColorPolicy {
    override_state: AtomicI8,
    default_enabled: bool,
}

impl ColorPolicy {
    #[must_use]
    pub fn new(default_enabled: bool) -> Self {
        Self {
            override_state: AtomicI8::new(i8::from(EnablementState::Unset)),
            default_enabled,
        }
    }

    /// Capture the sink's default (tty or in-memory) once.
    #[must_use]
    pub fn for_sink(sink: &(impl ColorSink + ?Sized)) -> Self {
        Self::new(sink.default_color_enabled())
    }

    pub fn enable(&self) { self.set_override(EnablementState::Enabled); }

    pub fn disable(&self) { self.set_override(EnablementState::Disabled); }

    /// There is no way to clear this override once set, only to flip it.
    fn set_override(&self, state: EnablementState) {
        self.override_state.store(i8::from(state), Ordering::Release);
    }

    #[must_use]
    pub fn override_state(&self) -> EnablementState {
        EnablementState::from(self.override_state.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn default_enabled(&self) -> bool { self.default_enabled }

    #[must_use]
    pub fn is_color_enabled(&self) -> bool { self.decide().enabled }

    #[must_use]
    pub fn decide(&self) -> ColorDecision {
        let decision = match self.override_state() {
            EnablementState::Enabled => decision(true, ColorDecisionSource::WriterOverride),
            EnablementState::Disabled => {
                decision(false, ColorDecisionSource::WriterOverride)
            }
            EnablementState::Unset => {
                if let Ok(enabled) = global_color_enabled::try_get_override() {
                    decision(enabled, ColorDecisionSource::GlobalOverride)
                } else if env_has_no_color() {
                    decision(false, ColorDecisionSource::NoColorEnv)
                } else if env_term_is_dump() {
                    decision(false, ColorDecisionSource::DumpTerm)
                } else {
                    decision(self.default_enabled, ColorDecisionSource::SinkDefault)
                }
            }
        };
        tracing::trace!(
            message = "color decision",
            enabled = decision.enabled,
            source = ?decision.source
        );
        decision
    }
}

impl Clone for ColorPolicy {
    fn clone(&self) -> Self {
        Self {
            override_state: AtomicI8::new(i8::from(self.override_state())),
            default_enabled: self.default_enabled,
        }
    }
}

fn decision(enabled: bool, source: ColorDecisionSource) -> ColorDecision {
    ColorDecision { enabled, source }
}

fn env_has_no_color() -> bool { env::var_os(ENV_NO_COLOR).is_some() }

fn env_term_is_dump() -> bool {
    env::var_os(ENV_TERM).is_some_and(|term| term == TERM_DUMP)
}
