// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, SerialSubscription, Subscriber, Teardown};
use rill_runtime::SchedulerRef;
use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Emits `0` once `delay` has elapsed, then completes.
pub fn timer(delay: Duration, scheduler: SchedulerRef) -> Observable<u64> {
    Observable::new(move |subscriber| {
        let timer = scheduler.schedule(
            delay,
            Box::new(move || {
                subscriber.next(0);
                subscriber.complete();
            }),
        );
        Teardown::from(timer)
    })
}

/// Emits `0, 1, 2, ...` every `period`, never completing.
///
/// The first value arrives one `period` after subscription. Each subscription runs
/// its own counter.
pub fn interval(period: Duration, scheduler: SchedulerRef) -> Observable<u64> {
    Observable::new(move |subscriber| {
        let ticker = Rc::new_cyclic(|me| Ticker {
            me: me.clone(),
            period,
            scheduler: scheduler.clone(),
            downstream: subscriber,
            count: Cell::new(0),
            timer: SerialSubscription::new(),
        });
        ticker.arm();

        Teardown::new(move || ticker.timer.unsubscribe())
    })
}

struct Ticker {
    me: Weak<Ticker>,
    period: Duration,
    scheduler: SchedulerRef,
    downstream: Subscriber<u64>,
    count: Cell<u64>,
    timer: SerialSubscription,
}

impl Ticker {
    fn arm(&self) {
        let me = self.me.clone();
        let timer = self.scheduler.schedule(
            self.period,
            Box::new(move || {
                if let Some(ticker) = me.upgrade() {
                    ticker.tick();
                }
            }),
        );
        self.timer.set(timer);
    }

    fn tick(&self) {
        let count = self.count.get();
        self.count.set(count + 1);
        self.downstream.next(count);
        if !self.downstream.is_closed() && !self.timer.is_closed() {
            self.arm();
        }
    }
}
