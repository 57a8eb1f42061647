// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scheduler abstraction for Rill.
//!
//! Observables are synchronous until a stage needs to wait: a timer or the
//! completion of an external operation. Those stages take a [`SchedulerRef`] so the
//! same pipeline runs on Tokio in production ([`TokioScheduler`]) and on a
//! deterministic virtual clock in tests ([`VirtualScheduler`]).

#[macro_use]
mod logging;

pub mod impls;
pub mod scheduler;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioScheduler;
pub use impls::virtual_time::VirtualScheduler;
pub use scheduler::{Scheduler, SchedulerRef};
