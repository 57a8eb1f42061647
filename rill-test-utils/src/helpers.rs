// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::test_observer::TestObserver;
use rill_core::{Notification, Observable, Teardown};
use rill_runtime::{SchedulerRef, VirtualScheduler};
use std::rc::Rc;
use std::time::Duration;

/// A virtual scheduler together with a type-erased handle to it.
pub fn virtual_scheduler() -> (VirtualScheduler, SchedulerRef) {
    let scheduler = VirtualScheduler::new();
    let handle: SchedulerRef = Rc::new(scheduler.clone());
    (scheduler, handle)
}

/// An observable that, once subscribed, waits `delay`, emits `values` and completes.
pub fn emit_after<T: Clone + 'static>(
    scheduler: &SchedulerRef,
    delay: Duration,
    values: Vec<T>,
) -> Observable<T> {
    let scheduler = scheduler.clone();
    Observable::new(move |subscriber| {
        let values = values.clone();
        let timer = scheduler.schedule(
            delay,
            Box::new(move || {
                for value in values {
                    subscriber.next(value);
                }
                subscriber.complete();
            }),
        );
        Teardown::from(timer)
    })
}

/// Subscribes, and returns everything delivered synchronously.
pub fn collect_sync<T: Clone + 'static>(observable: &Observable<T>) -> Vec<Notification<T>> {
    let (observer, subscription) = TestObserver::attach(observable);
    subscription.unsubscribe();
    observer.events()
}

/// Values delivered synchronously on subscription.
pub fn values_sync<T: Clone + 'static>(observable: &Observable<T>) -> Vec<T> {
    let (observer, subscription) = TestObserver::attach(observable);
    subscription.unsubscribe();
    observer.values()
}

/// Panics unless `observer` completed after exactly `expected`.
pub fn assert_completed_with<T>(observer: &TestObserver<T>, expected: &[T])
where
    T: Clone + PartialEq + std::fmt::Debug + 'static,
{
    assert_eq!(observer.values(), expected);
    assert!(
        observer.is_completed(),
        "expected completion, got {:?}",
        observer.events()
    );
}
