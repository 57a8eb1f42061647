// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic scheduler driven by a virtual clock.
//!
//! Nothing happens on its own: the owner moves the clock with
//! [`advance`](VirtualScheduler::advance) and drives spawned futures with
//! [`run_until_idle`](VirtualScheduler::run_until_idle). Timers due at the same instant
//! fire in the order they were scheduled.

use crate::scheduler::Scheduler;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::{abortable, LocalBoxFuture};
use futures::task::LocalSpawnExt;
use futures::FutureExt;
use rill_core::Subscription;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

type TimerKey = (Duration, u64);

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    timers: BTreeMap<TimerKey, Box<dyn FnOnce()>>,
}

/// Scheduler with a manually advanced clock.
///
/// Cloning yields another handle to the same clock and task pool.
#[derive(Clone)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<Clock>>,
    pool: Rc<RefCell<LocalPool>>,
    spawner: LocalSpawner,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            clock: Rc::new(RefCell::new(Clock::default())),
            pool: Rc::new(RefCell::new(pool)),
            spawner,
        }
    }

    /// Polls spawned futures until none can make progress, without moving the clock.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a future driven by this scheduler.
    pub fn run_until_idle(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    /// Moves the clock forward by `by`, firing every timer that falls due on the way.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Moves the clock to `target`, firing every timer due at or before it.
    pub fn advance_to(&self, target: Duration) {
        self.run_until_idle();
        while let Some((due, task)) = self.pop_due(target) {
            self.clock.borrow_mut().now = due;
            task();
            self.run_until_idle();
        }

        let mut clock = self.clock.borrow_mut();
        if clock.now < target {
            clock.now = target;
        }
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    fn pop_due(&self, target: Duration) -> Option<(Duration, Box<dyn FnOnce()>)> {
        let mut clock = self.clock.borrow_mut();
        let due = clock.timers.keys().next().copied()?;
        if due.0 > target {
            return None;
        }
        clock.timers.remove(&due).map(|task| (due.0, task))
    }
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Subscription {
        let key = {
            let mut clock = self.clock.borrow_mut();
            let key = (clock.now + delay, clock.next_seq);
            clock.next_seq += 1;
            clock.timers.insert(key, task);
            key
        };

        let clock: Weak<RefCell<Clock>> = Rc::downgrade(&self.clock);
        Subscription::from_fn(move || {
            if let Some(clock) = clock.upgrade() {
                // Dropped outside the borrow: the task may own subscriptions.
                let removed = clock.borrow_mut().timers.remove(&key);
                drop(removed);
            }
        })
    }

    fn spawn(&self, future: LocalBoxFuture<'static, ()>) -> Subscription {
        let (future, handle) = abortable(future);
        if let Err(error) = self.spawner.spawn_local(future.map(|_| ())) {
            warn!("virtual scheduler could not spawn task: {}", error);
            return Subscription::closed();
        }
        Subscription::from_fn(move || handle.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_timers_fire_in_due_order() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        for (label, ms) in [("b", 20), ("a", 10), ("c", 20)] {
            let fired = fired.clone();
            let _ = scheduler.schedule(
                Duration::from_millis(ms),
                Box::new(move || fired.borrow_mut().push(label)),
            );
        }

        scheduler.advance(Duration::from_millis(15));
        assert_eq!(*fired.borrow(), vec!["a"]);

        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*fired.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now(), Duration::from_millis(20));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let timer = scheduler.schedule(Duration::from_millis(5), Box::new(move || flag.set(true)));
        timer.unsubscribe();
        scheduler.advance(Duration::from_millis(10));

        assert!(!fired.get());
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_timer_scheduled_while_firing_uses_current_time() {
        let scheduler = VirtualScheduler::new();
        let fired_at = Rc::new(Cell::new(Duration::ZERO));
        let (inner_scheduler, sink) = (scheduler.clone(), fired_at.clone());

        let _ = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                let at = inner_scheduler.clone();
                let _ = inner_scheduler.schedule(
                    Duration::from_millis(10),
                    Box::new(move || sink.set(at.now())),
                );
            }),
        );

        scheduler.advance(Duration::from_millis(30));

        assert_eq!(fired_at.get(), Duration::from_millis(20));
    }

    #[test]
    fn test_sleep_resolves_on_virtual_clock() {
        let scheduler = VirtualScheduler::new();
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        let sleep = scheduler.sleep(Duration::from_millis(100));

        let _task = scheduler.spawn(
            async move {
                sleep.await;
                flag.set(true);
            }
            .boxed_local(),
        );

        scheduler.advance(Duration::from_millis(99));
        assert!(!done.get());

        scheduler.advance(Duration::from_millis(1));
        assert!(done.get());
    }

    #[test]
    fn test_aborted_task_does_not_resume() {
        let scheduler = VirtualScheduler::new();
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        let sleep = scheduler.sleep(Duration::from_millis(10));

        let task = scheduler.spawn(
            async move {
                sleep.await;
                flag.set(true);
            }
            .boxed_local(),
        );
        scheduler.run_until_idle();
        task.unsubscribe();
        scheduler.advance(Duration::from_millis(20));

        assert!(!done.get());
    }
}
