// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Level-gated logging stage.
//!
//! The threshold is an explicit [`DebugConfig`] value handed to the stage when the
//! pipeline is built, so two pipelines can log at different levels side by side.

use crate::tap::TapExt;
use rill_core::Observable;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Trace,
    Debug,
    Info,
    Error,
}

/// Minimum level a `debug` stage must have to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugConfig {
    pub threshold: LoggingLevel,
}

impl DebugConfig {
    pub const fn new(threshold: LoggingLevel) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn enabled(&self, level: LoggingLevel) -> bool {
        level >= self.threshold
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::new(LoggingLevel::Info)
    }
}

/// Extension trait providing the `debug` operator.
pub trait DebugExt<T> {
    /// Logs `message: value` for every value when `level` passes `config`.
    ///
    /// The sequence itself is left untouched.
    fn debug(self, config: DebugConfig, level: LoggingLevel, message: impl Into<String>) -> Observable<T>;
}

impl<T: Debug + 'static> DebugExt<T> for Observable<T> {
    fn debug(self, config: DebugConfig, level: LoggingLevel, message: impl Into<String>) -> Observable<T> {
        if !config.enabled(level) {
            return self;
        }
        let message = message.into();
        self.tap(move |value| emit(level, &message, value))
    }
}

#[cfg(feature = "tracing")]
fn emit<T: Debug>(level: LoggingLevel, message: &str, value: &T) {
    match level {
        LoggingLevel::Trace => tracing::trace!("{}: {:?}", message, value),
        LoggingLevel::Debug => tracing::debug!("{}: {:?}", message, value),
        LoggingLevel::Info => tracing::info!("{}: {:?}", message, value),
        LoggingLevel::Error => tracing::error!("{}: {:?}", message, value),
    }
}

#[cfg(not(feature = "tracing"))]
fn emit<T: Debug>(level: LoggingLevel, message: &str, value: &T) {
    if level == LoggingLevel::Error {
        eprintln!("{message}: {value:?}");
    } else {
        println!("{message}: {value:?}");
    }
}
