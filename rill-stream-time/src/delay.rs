// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Notification, Observable, Observer, RillError, SerialSubscription, Subscriber, Teardown};
use rill_runtime::SchedulerRef;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Extension trait providing the `delay` operator.
pub trait DelayExt<T> {
    /// Shifts every event, values and the terminal event alike, by `offset`.
    ///
    /// Relative order is preserved: events are queued with their due time and a
    /// single timer releases the head of the queue. An error therefore arrives
    /// `offset` after it occurred, behind every value emitted before it.
    fn delay(self, offset: Duration, scheduler: SchedulerRef) -> Observable<T>;
}

impl<T: 'static> DelayExt<T> for Observable<T> {
    fn delay(self, offset: Duration, scheduler: SchedulerRef) -> Observable<T> {
        Observable::new(move |subscriber| {
            let delayer = Rc::new_cyclic(|me| Delayer {
                me: me.clone(),
                offset,
                scheduler: scheduler.clone(),
                downstream: subscriber,
                queue: RefCell::new(VecDeque::new()),
                timer: SerialSubscription::new(),
            });

            let upstream = self.subscribe(Rc::clone(&delayer));
            Teardown::new(move || {
                upstream.unsubscribe();
                delayer.timer.unsubscribe();
                delayer.queue.borrow_mut().clear();
            })
        })
    }
}

struct Delayer<T> {
    me: Weak<Delayer<T>>,
    offset: Duration,
    scheduler: SchedulerRef,
    downstream: Subscriber<T>,
    queue: RefCell<VecDeque<(Duration, Notification<T>)>>,
    timer: SerialSubscription,
}

impl<T: 'static> Delayer<T> {
    fn enqueue(&self, notification: Notification<T>) {
        let due = self.scheduler.now() + self.offset;
        let was_idle = {
            let mut queue = self.queue.borrow_mut();
            queue.push_back((due, notification));
            queue.len() == 1
        };
        if was_idle {
            self.arm(self.offset);
        }
    }

    fn arm(&self, wait: Duration) {
        let me = self.me.clone();
        let timer = self.scheduler.schedule(
            wait,
            Box::new(move || {
                if let Some(delayer) = me.upgrade() {
                    delayer.release();
                }
            }),
        );
        self.timer.set(timer);
    }

    /// Delivers every event that is due, then re-arms for the next one.
    fn release(&self) {
        let now = self.scheduler.now();
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let ready = queue.front().is_some_and(|(due, _)| *due <= now);
                if ready {
                    queue.pop_front()
                } else {
                    None
                }
            };
            match next {
                Some((_, notification)) => self.downstream.notify(notification),
                None => break,
            }
        }

        let head = self.queue.borrow().front().map(|(due, _)| *due);
        if let Some(due) = head {
            self.arm(due.saturating_sub(now));
        }
    }
}

impl<T: 'static> Observer<T> for Delayer<T> {
    fn on_next(&self, value: T) {
        self.enqueue(Notification::Next(value));
    }

    fn on_error(&self, error: RillError) {
        self.enqueue(Notification::Error(error));
    }

    fn on_complete(&self) {
        self.enqueue(Notification::Complete);
    }
}
