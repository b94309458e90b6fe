// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use tracing_core::LevelFilter;

use crate::StdoutMock;

#[derive(Clone, Debug)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            writer_config: WriterConfig::Stderr,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new(level_filter: LevelFilter, writer_config: WriterConfig) -> Self {
        Self {
            level_filter,
            writer_config,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

/// Where log lines go. Stderr is the usual choice, so logs never mix with the styled
/// output a program prints on stdout.
#[derive(Clone, Debug)]
pub enum WriterConfig {
    Stdout,
    Stderr,
    /// Captures log lines in memory, for tests.
    Mock(StdoutMock),
    None,
}

impl FromStr for WriterConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(WriterConfig::Stdout),
            "stderr" => Ok(WriterConfig::Stderr),
            "none" | "" => Ok(WriterConfig::None),
            _ => Err(format!("{s} is not a valid tracing writer")),
        }
    }
}
