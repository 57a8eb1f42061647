// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::Scheduler;
use futures::future::LocalBoxFuture;
use rill_core::Subscription;
use std::time::Duration;
use tokio::time::Instant;

/// Scheduler backed by Tokio's local task set.
///
/// Work is spawned with [`tokio::task::spawn_local`], so every method must be called
/// from inside a [`tokio::task::LocalSet`]. Timers use Tokio's clock and therefore
/// follow `tokio::time::pause`/`advance` in tests.
#[derive(Debug, Clone, Copy)]
pub struct TokioScheduler {
    origin: Instant,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Subscription {
        // The deadline counts from this call, not from the first poll.
        let sleep = tokio::time::sleep(delay);
        let handle = tokio::task::spawn_local(async move {
            sleep.await;
            task();
        });
        Subscription::from_fn(move || handle.abort())
    }

    fn spawn(&self, future: LocalBoxFuture<'static, ()>) -> Subscription {
        let handle = tokio::task::spawn_local(future);
        Subscription::from_fn(move || handle.abort())
    }

    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(delay))
    }
}
