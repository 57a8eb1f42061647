// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for Rill observables.
//!
//! Every operator here takes a [`SchedulerRef`](rill_runtime::SchedulerRef) and
//! never reads the wall clock directly, so the same pipeline runs under
//! [`TokioScheduler`](rill_runtime::TokioScheduler) in production and under
//! [`VirtualScheduler`](rill_runtime::VirtualScheduler) in tests.
//!
//! - **[`debounce`](DebounceExt::debounce)**: emit the last value of a quiet burst
//! - **[`delay`](DelayExt::delay)**: shift every event by a fixed offset
//! - **[`retry_with_delay`](RetryWithDelayExt::retry_with_delay)**: resubscribe after errors
//! - **[`timer`]** / **[`interval`]**: scheduler-driven sources

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod debounce;
pub mod delay;
pub mod prelude;
pub mod retry_policy;
pub mod retry_with_delay;
pub mod sources;

pub use self::debounce::DebounceExt;
pub use self::delay::DelayExt;
pub use self::retry_policy::RetryPolicy;
pub use self::retry_with_delay::RetryWithDelayExt;
pub use self::sources::{interval, timer};
