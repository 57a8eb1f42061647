// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use rill_core::Subscription;
use std::rc::Rc;
use std::time::Duration;

/// Source of suspension points for observables.
///
/// Everything an observable does outside the subscribing call stack goes through a
/// scheduler: timer expiry (`debounce`, `delay`, retry back-off) and completion of
/// external asynchronous operations. Both kinds of work run on the same logical
/// thread as the rest of the pipeline.
///
/// The returned [`Subscription`] cancels the scheduled work; cancelling work that
/// already ran is a no-op.
pub trait Scheduler {
    /// Time elapsed since the scheduler was created.
    fn now(&self) -> Duration;

    /// Runs `task` once, after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Subscription;

    /// Drives `future` to completion on the local thread.
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) -> Subscription;

    /// A future resolving after `delay`, measured on this scheduler's clock.
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        let timer = self.schedule(
            delay,
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        async move {
            let _timer = CancelOnDrop(timer);
            let _ = rx.await;
        }
        .boxed_local()
    }
}

/// Cancels the timer of a sleep that is dropped before it resolves.
struct CancelOnDrop(Subscription);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.unsubscribe();
    }
}

/// Shared handle to a scheduler.
pub type SchedulerRef = Rc<dyn Scheduler>;
