// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, Observer, RillError, SerialSubscription, Subscriber, Teardown};
use rill_runtime::SchedulerRef;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Extension trait providing the `debounce` operator.
pub trait DebounceExt<T> {
    /// Emits a value only after `window` has passed without a newer one.
    ///
    /// Only the most recent value is buffered; every new value restarts the timer.
    ///
    /// # Behavior
    ///
    /// - A burst of values closer together than `window` yields one emission: the
    ///   last value, `window` after it arrived
    /// - Completion flushes a pending value immediately, then completes
    /// - An error discards the pending value and is forwarded immediately
    fn debounce(self, window: Duration, scheduler: SchedulerRef) -> Observable<T>;
}

impl<T: 'static> DebounceExt<T> for Observable<T> {
    fn debounce(self, window: Duration, scheduler: SchedulerRef) -> Observable<T> {
        Observable::new(move |subscriber| {
            let debouncer = Rc::new_cyclic(|me| Debouncer {
                me: me.clone(),
                window,
                scheduler: scheduler.clone(),
                downstream: subscriber,
                pending: RefCell::new(None),
                timer: SerialSubscription::new(),
            });

            let upstream = self.subscribe(Rc::clone(&debouncer));
            Teardown::new(move || {
                upstream.unsubscribe();
                debouncer.timer.unsubscribe();
                debouncer.pending.borrow_mut().take();
            })
        })
    }
}

struct Debouncer<T> {
    me: Weak<Debouncer<T>>,
    window: Duration,
    scheduler: SchedulerRef,
    downstream: Subscriber<T>,
    pending: RefCell<Option<T>>,
    timer: SerialSubscription,
}

impl<T: 'static> Debouncer<T> {
    fn flush(&self) {
        let value = self.pending.borrow_mut().take();
        if let Some(value) = value {
            self.downstream.next(value);
        }
    }
}

impl<T: 'static> Observer<T> for Debouncer<T> {
    fn on_next(&self, value: T) {
        *self.pending.borrow_mut() = Some(value);
        let me = self.me.clone();
        let timer = self.scheduler.schedule(
            self.window,
            Box::new(move || {
                if let Some(debouncer) = me.upgrade() {
                    debouncer.flush();
                }
            }),
        );
        self.timer.set(timer);
    }

    fn on_error(&self, error: RillError) {
        self.timer.clear();
        self.pending.borrow_mut().take();
        self.downstream.error(error);
    }

    fn on_complete(&self) {
        self.timer.clear();
        self.flush();
        self.downstream.complete();
    }
}
