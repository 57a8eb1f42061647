// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Replaying multicast.
//!
//! One upstream execution is recorded and replayed to every attachment: a late
//! attachment first receives every value recorded so far, then the live values, and
//! after upstream completion the completion itself.
//!
//! Two connection policies are offered:
//!
//! - [`share_replay`](ShareReplayExt::share_replay) connects on the first attachment
//!   and stays connected even when every observer has left. A long-lived cache
//!   (one fetch for the lifetime of the pipeline) wants this.
//! - [`share_replay_ref_counted`](ShareReplayExt::share_replay_ref_counted)
//!   disconnects and forgets the recording when the last observer leaves; the next
//!   attachment re-executes the source.
//!
//! An upstream error is delivered to the current observers and resets the recording
//! under both policies, so the next attachment retries the source.

use rill_core::{Hub, Observable, Observer, RillError, Subscription, Teardown};
use std::cell::RefCell;
use std::rc::Rc;

struct ReplayState<T> {
    hub: Hub<T>,
    recorded: Vec<T>,
    completed: bool,
    connection: Option<Subscription>,
    subscribers: usize,
}

impl<T: Clone + 'static> ReplayState<T> {
    fn new() -> Self {
        Self {
            hub: Hub::new(),
            recorded: Vec::new(),
            completed: false,
            connection: None,
            subscribers: 0,
        }
    }

    fn reset(&mut self) -> Option<Subscription> {
        self.hub = Hub::new();
        self.recorded.clear();
        self.completed = false;
        self.connection.take()
    }
}

/// Upstream observer recording into the shared state.
struct Recorder<T> {
    state: Rc<RefCell<ReplayState<T>>>,
}

impl<T: Clone + 'static> Observer<T> for Recorder<T> {
    fn on_next(&self, value: T) {
        let hub = {
            let mut state = self.state.borrow_mut();
            state.recorded.push(value.clone());
            state.hub.clone()
        };
        let _ = hub.next(value);
    }

    fn on_error(&self, error: RillError) {
        let hub = {
            let mut state = self.state.borrow_mut();
            let hub = state.hub.clone();
            let _ = state.reset();
            hub
        };
        let _ = hub.error(error);
    }

    fn on_complete(&self) {
        let hub = {
            let mut state = self.state.borrow_mut();
            state.completed = true;
            state.hub.clone()
        };
        hub.complete();
    }
}

/// Extension trait providing the replaying multicast operators.
pub trait ShareReplayExt<T> {
    /// Records one upstream execution and replays it to every attachment.
    ///
    /// The upstream stays connected once started.
    fn share_replay(self) -> Observable<T>;

    /// Like [`share_replay`](ShareReplayExt::share_replay), but disconnects and forgets
    /// the recording when the last observer detaches before completion.
    fn share_replay_ref_counted(self) -> Observable<T>;
}

impl<T: Clone + 'static> ShareReplayExt<T> for Observable<T> {
    fn share_replay(self) -> Observable<T> {
        replay(self, false)
    }

    fn share_replay_ref_counted(self) -> Observable<T> {
        replay(self, true)
    }
}

fn replay<T: Clone + 'static>(source: Observable<T>, ref_counted: bool) -> Observable<T> {
    let state = Rc::new(RefCell::new(ReplayState::new()));

    Observable::new(move |subscriber| {
        let (recorded, completed, hub) = {
            let state = state.borrow();
            (state.recorded.clone(), state.completed, state.hub.clone())
        };

        for value in recorded {
            if subscriber.is_closed() {
                return Teardown::empty();
            }
            subscriber.next(value);
        }
        if completed {
            subscriber.complete();
            return Teardown::empty();
        }

        let membership = hub.observable().subscribe(subscriber);
        let connect = {
            let mut state = state.borrow_mut();
            state.subscribers += 1;
            if state.connection.is_none() {
                state.connection = Some(Subscription::new());
                true
            } else {
                false
            }
        };

        if connect {
            let connection = source.subscribe(Recorder {
                state: Rc::clone(&state),
            });
            let mut state = state.borrow_mut();
            let pending = state.connection.as_ref().is_some_and(|placeholder| !placeholder.is_closed());
            if pending && !connection.is_closed() {
                state.connection = Some(connection);
            }
        }

        let state = Rc::clone(&state);
        Teardown::new(move || {
            membership.unsubscribe();
            let disconnect = {
                let mut state = state.borrow_mut();
                state.subscribers = state.subscribers.saturating_sub(1);
                if ref_counted && state.subscribers == 0 && !state.completed {
                    state.reset()
                } else {
                    None
                }
            };
            if let Some(connection) = disconnect {
                connection.unsubscribe();
            }
        })
    })
}
