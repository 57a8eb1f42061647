// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reference-counted multicast.
//!
//! [`share`](ShareExt::share) turns a cold observable into a hot one: the first
//! attachment connects a single upstream subscription feeding a [`Hub`], later
//! attachments join that hub, and the upstream is disconnected when the last
//! attachment leaves. After the upstream terminates, the next attachment starts a
//! fresh execution.

use rill_core::{Hub, Observable, Subscription, Teardown};
use std::cell::RefCell;
use std::rc::Rc;

struct ShareState<T> {
    hub: Option<Hub<T>>,
    connection: Option<Subscription>,
    subscribers: usize,
}

impl<T: Clone + 'static> ShareState<T> {
    fn current_hub(&mut self) -> Hub<T> {
        match &self.hub {
            Some(hub) if !hub.is_closed() => hub.clone(),
            _ => {
                let hub = Hub::new();
                self.hub = Some(hub.clone());
                self.connection = None;
                hub
            }
        }
    }
}

/// Extension trait providing the `share` operator.
pub trait ShareExt<T> {
    /// Shares one upstream execution among all concurrent attachments.
    ///
    /// Late attachments see only values emitted after they attached.
    fn share(self) -> Observable<T>;
}

impl<T: Clone + 'static> ShareExt<T> for Observable<T> {
    fn share(self) -> Observable<T> {
        let state = Rc::new(RefCell::new(ShareState {
            hub: None,
            connection: None,
            subscribers: 0,
        }));

        Observable::new(move |subscriber| {
            let (hub, connect) = {
                let mut state = state.borrow_mut();
                let hub = state.current_hub();
                state.subscribers += 1;
                let connect = state.connection.is_none();
                (hub, connect)
            };

            let membership = hub.observable().subscribe(subscriber);

            if connect {
                // Placeholder so re-entrant attachments do not connect twice.
                state.borrow_mut().connection = Some(Subscription::new());
                let connection = self.subscribe(hub.clone());
                let mut state = state.borrow_mut();
                let open = state.hub.as_ref().is_some_and(|current| !current.is_closed());
                state.connection = open.then_some(connection);
            }

            let state = Rc::clone(&state);
            Teardown::new(move || {
                membership.unsubscribe();
                let disconnect = {
                    let mut state = state.borrow_mut();
                    state.subscribers = state.subscribers.saturating_sub(1);
                    if state.subscribers == 0 {
                        state.hub = None;
                        state.connection.take()
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
}
