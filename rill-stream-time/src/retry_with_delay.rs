// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::retry_policy::RetryPolicy;
use rill_core::{Observable, Observer, RillError, SerialSubscription, Subscriber, Teardown};
use rill_runtime::SchedulerRef;
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Extension trait providing the `retry_with_delay` operator.
pub trait RetryWithDelayExt<T> {
    /// Resubscribes to the whole source after an error, following `policy`.
    ///
    /// Values and completion pass through. An error schedules a fresh subscription
    /// after `policy.delay_for(n)`; once `policy` gives up, the last error is
    /// forwarded. With `recoverable_only`, a permanent error is forwarded at once.
    /// Unsubscribing cancels both the running attempt and a pending retry.
    fn retry_with_delay(self, policy: RetryPolicy, scheduler: SchedulerRef) -> Observable<T>;
}

impl<T: 'static> RetryWithDelayExt<T> for Observable<T> {
    fn retry_with_delay(self, policy: RetryPolicy, scheduler: SchedulerRef) -> Observable<T> {
        Observable::new(move |subscriber| {
            let retry = Rc::new_cyclic(|me| Retry {
                me: me.clone(),
                source: self.clone(),
                policy: policy.clone(),
                scheduler: scheduler.clone(),
                downstream: subscriber,
                failures: Cell::new(0),
                current: SerialSubscription::new(),
            });
            retry.attempt();

            Teardown::new(move || retry.current.unsubscribe())
        })
    }
}

struct Retry<T> {
    me: Weak<Retry<T>>,
    source: Observable<T>,
    policy: RetryPolicy,
    scheduler: SchedulerRef,
    downstream: Subscriber<T>,
    failures: Cell<u32>,
    current: SerialSubscription,
}

impl<T: 'static> Retry<T> {
    fn attempt(&self) {
        let Some(me) = self.me.upgrade() else {
            return;
        };
        let failures_before = self.failures.get();
        let subscription = self.source.subscribe(AttemptObserver { retry: me });

        // A synchronous failure has already replaced the current slot with its timer.
        if self.failures.get() == failures_before {
            self.current.set(subscription);
        }
    }
}

struct AttemptObserver<T> {
    retry: Rc<Retry<T>>,
}

impl<T: 'static> Observer<T> for AttemptObserver<T> {
    fn on_next(&self, value: T) {
        self.retry.downstream.next(value);
    }

    fn on_error(&self, error: RillError) {
        let retry = &self.retry;
        let failures = retry.failures.get() + 1;
        retry.failures.set(failures);

        if !retry.policy.should_retry(&error, failures) {
            warn!("giving up after {} failed attempts: {}", failures, error);
            retry.downstream.error(error);
            return;
        }

        let wait = retry.policy.delay_for(failures);
        warn!("attempt {} failed ({}), retrying in {:?}", failures, error, wait);
        let me = retry.me.clone();
        let timer = retry.scheduler.schedule(
            wait,
            Box::new(move || {
                if let Some(retry) = me.upgrade() {
                    retry.attempt();
                }
            }),
        );
        retry.current.set(timer);
    }

    fn on_complete(&self) {
        self.retry.downstream.complete();
    }
}
