// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::RillError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When and how often a failed observable is resubscribed.
///
/// The default retries forever with a fixed two-second delay. Set `max_attempts` to
/// give up, and `backoff_factor` above 1.0 to grow the delay after each failure.
///
/// # Example
///
/// ```
/// use rill_stream_time::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::fixed(Duration::from_millis(500))
///     .with_max_attempts(3)
///     .with_backoff(2.0);
///
/// assert_eq!(policy.delay_for(1), Duration::from_millis(500));
/// assert_eq!(policy.delay_for(2), Duration::from_millis(1000));
/// assert!(policy.allows_retry(2));
/// assert!(!policy.allows_retry(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Delay before the first retry, in milliseconds.
    pub delay_ms: u64,
    /// Total number of subscriptions, the first one included. `None` never gives up.
    pub max_attempts: Option<u32>,
    /// Multiplier applied to the delay after each failure.
    pub backoff_factor: f64,
    /// Upper bound for the grown delay, in milliseconds.
    pub max_delay_ms: Option<u64>,
    /// Retry only errors that [`RillError::is_recoverable`] accepts.
    pub recoverable_only: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            max_attempts: None,
            backoff_factor: 1.0,
            max_delay_ms: None,
            recoverable_only: false,
        }
    }
}

impl RetryPolicy {
    /// Unbounded retry with a constant `delay`.
    #[must_use]
    pub fn fixed(delay: Duration) -> Self {
        Self {
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    #[must_use]
    pub fn with_backoff(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    #[must_use]
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay_ms = Some(u64::try_from(max_delay.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Forwards permanent errors (bad status, bad payload) without retrying.
    #[must_use]
    pub fn with_recoverable_only(mut self) -> Self {
        self.recoverable_only = true;
        self
    }

    /// Whether another attempt may follow `failures` consecutive failures.
    #[must_use]
    pub fn allows_retry(&self, failures: u32) -> bool {
        self.max_attempts.map_or(true, |max| failures < max)
    }

    /// Whether `error`, the failure number `failures`, is followed by another attempt.
    #[must_use]
    pub fn should_retry(&self, error: &RillError, failures: u32) -> bool {
        (!self.recoverable_only || error.is_recoverable()) && self.allows_retry(failures)
    }

    /// Delay before the retry following failure number `failure` (1-based).
    #[must_use]
    pub fn delay_for(&self, failure: u32) -> Duration {
        let factor = if self.backoff_factor.is_finite() && self.backoff_factor >= 1.0 {
            self.backoff_factor
        } else {
            1.0
        };
        let exponent = i32::try_from(failure.saturating_sub(1)).unwrap_or(i32::MAX);
        let millis = self.delay_ms as f64 * factor.powi(exponent);
        let grown = Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX);

        match self.max_delay_ms {
            Some(cap) => grown.min(Duration::from_millis(cap)),
            None => grown,
        }
    }
}
