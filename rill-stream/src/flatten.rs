// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared engine of the flattening operators.
//!
//! The four flattening operators differ only in what happens when an outer value
//! arrives while inner observables are still running. That decision is the
//! [`FlattenPolicy`]; everything else (tracking inner subscriptions, forwarding,
//! error propagation, completion bookkeeping) lives here once.
//!
//! The output completes when the outer source has completed and no inner
//! observable is running or queued. Any error, outer or inner, terminates the
//! output and unsubscribes everything.

use rill_core::{Observable, Observer, RillError, Subscriber, Subscription, Teardown};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

/// What to do with an outer value while inner observables are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlattenPolicy {
    /// Queue it; run inners one at a time in arrival order.
    Concat,
    /// Subscribe immediately; inners run side by side.
    Merge,
    /// Cancel the active inner, then subscribe.
    Switch,
    /// Drop it.
    Exhaust,
}

type Projector<A, B> = Rc<dyn Fn(A) -> Observable<B>>;

struct FlattenState<A> {
    queue: VecDeque<A>,
    active: BTreeMap<u64, Subscription>,
    next_id: u64,
    outer_done: bool,
}

struct Engine<A, B> {
    policy: FlattenPolicy,
    project: Projector<A, B>,
    downstream: Subscriber<B>,
    state: RefCell<FlattenState<A>>,
}

impl<A: 'static, B: 'static> Engine<A, B> {
    fn on_outer_next(self: &Rc<Self>, value: A) {
        if self.downstream.is_closed() {
            return;
        }

        match self.policy {
            FlattenPolicy::Merge => self.start(value),
            FlattenPolicy::Concat => {
                let mut state = self.state.borrow_mut();
                if state.active.is_empty() {
                    drop(state);
                    self.start(value);
                } else {
                    state.queue.push_back(value);
                }
            }
            FlattenPolicy::Exhaust => {
                let busy = !self.state.borrow().active.is_empty();
                if busy {
                    trace!("exhaust: outer value ignored while an inner is active");
                } else {
                    self.start(value);
                }
            }
            FlattenPolicy::Switch => {
                let cancelled = std::mem::take(&mut self.state.borrow_mut().active);
                for (_, subscription) in cancelled {
                    subscription.unsubscribe();
                }
                self.start(value);
            }
        }
    }

    fn start(self: &Rc<Self>, value: A) {
        let inner = (self.project)(value);
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.active.insert(id, Subscription::new());
            id
        };

        let subscription = inner.subscribe(InnerObserver {
            engine: Rc::clone(self),
            id,
        });

        // The slot is gone if the inner finished, or was cancelled, while subscribing.
        let stale = match self.state.borrow_mut().active.get_mut(&id) {
            Some(slot) => {
                *slot = subscription;
                None
            }
            None => Some(subscription),
        };
        if let Some(subscription) = stale {
            subscription.unsubscribe();
        }
    }

    fn is_active(&self, id: u64) -> bool {
        self.state.borrow().active.contains_key(&id)
    }

    fn on_inner_complete(self: &Rc<Self>, id: u64) {
        let next = {
            let mut state = self.state.borrow_mut();
            if state.active.remove(&id).is_none() {
                return;
            }
            if self.policy == FlattenPolicy::Concat {
                state.queue.pop_front()
            } else {
                None
            }
        };

        match next {
            Some(value) => self.start(value),
            None => self.complete_if_drained(),
        }
    }

    fn on_outer_complete(&self) {
        self.state.borrow_mut().outer_done = true;
        self.complete_if_drained();
    }

    fn complete_if_drained(&self) {
        let drained = {
            let state = self.state.borrow();
            state.outer_done && state.active.is_empty() && state.queue.is_empty()
        };
        if drained {
            self.downstream.complete();
        }
    }

    fn dispose(&self) {
        let active = {
            let mut state = self.state.borrow_mut();
            state.queue.clear();
            std::mem::take(&mut state.active)
        };
        for (_, subscription) in active {
            subscription.unsubscribe();
        }
    }
}

struct OuterObserver<A, B> {
    engine: Rc<Engine<A, B>>,
}

impl<A: 'static, B: 'static> Observer<A> for OuterObserver<A, B> {
    fn on_next(&self, value: A) {
        self.engine.on_outer_next(value);
    }

    fn on_error(&self, error: RillError) {
        self.engine.downstream.error(error);
    }

    fn on_complete(&self) {
        self.engine.on_outer_complete();
    }
}

struct InnerObserver<A, B> {
    engine: Rc<Engine<A, B>>,
    id: u64,
}

impl<A: 'static, B: 'static> Observer<B> for InnerObserver<A, B> {
    fn on_next(&self, value: B) {
        if self.engine.is_active(self.id) {
            self.engine.downstream.next(value);
        }
    }

    fn on_error(&self, error: RillError) {
        if self.engine.is_active(self.id) {
            self.engine.downstream.error(error);
        }
    }

    fn on_complete(&self) {
        self.engine.on_inner_complete(self.id);
    }
}

/// Flattens `source` through `project` under `policy`.
pub fn flatten<A, B, F>(source: Observable<A>, policy: FlattenPolicy, project: F) -> Observable<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> Observable<B> + 'static,
{
    let project: Projector<A, B> = Rc::new(project);
    Observable::new(move |subscriber| {
        let engine = Rc::new(Engine {
            policy,
            project: Rc::clone(&project),
            downstream: subscriber,
            state: RefCell::new(FlattenState {
                queue: VecDeque::new(),
                active: BTreeMap::new(),
                next_id: 0,
                outer_done: false,
            }),
        });

        let outer = source.subscribe(OuterObserver {
            engine: Rc::clone(&engine),
        });

        Teardown::new(move || {
            outer.unsubscribe();
            engine.dispose();
        })
    })
}
