// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RillError;
use crate::notification::Notification;
use crate::observer::Observer;
use crate::subscription::{Subscription, Teardown};
use std::cell::Cell;
use std::marker::PhantomData;
use std::rc::Rc;

struct SubscriberState<T> {
    observer: Box<dyn Observer<T>>,
    stopped: Cell<bool>,
    subscription: Subscription,
}

/// The producer-facing side of one subscription.
///
/// A producer emits through its `Subscriber`; the subscriber guards the observer
/// contract:
///
/// - nothing is delivered once a terminal event was delivered,
/// - nothing is delivered once the subscription has been disposed,
/// - a terminal event closes the subscription, running the producer's teardown.
///
/// Subscribers are cheap to clone so asynchronous producers can keep one inside
/// callbacks and futures.
pub struct Subscriber<T> {
    state: Rc<SubscriberState<T>>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: 'static> Subscriber<T> {
    pub(crate) fn new(observer: impl Observer<T> + 'static) -> Self {
        Self {
            state: Rc::new(SubscriberState {
                observer: Box::new(observer),
                stopped: Cell::new(false),
                subscription: Subscription::new(),
            }),
        }
    }

    /// Delivers a value unless the subscriber is closed.
    pub fn next(&self, value: T) {
        if self.is_closed() {
            return;
        }
        self.state.observer.on_next(value);
    }

    /// Delivers the terminal error and closes the subscription.
    pub fn error(&self, error: RillError) {
        if self.is_closed() {
            return;
        }
        self.state.stopped.set(true);
        self.state.observer.on_error(error);
        self.state.subscription.unsubscribe();
    }

    /// Delivers completion and closes the subscription.
    pub fn complete(&self) {
        if self.is_closed() {
            return;
        }
        self.state.stopped.set(true);
        self.state.observer.on_complete();
        self.state.subscription.unsubscribe();
    }

    /// Delivers a reified event.
    pub fn notify(&self, notification: Notification<T>) {
        match notification {
            Notification::Next(value) => self.next(value),
            Notification::Error(error) => self.error(error),
            Notification::Complete => self.complete(),
        }
    }

    /// Returns `true` after a terminal event or after disposal.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.stopped.get() || self.state.subscription.is_closed()
    }

    /// Registers cleanup to run when this subscription closes.
    pub fn add(&self, teardown: impl Into<Teardown>) {
        self.state.subscription.add(teardown);
    }

    /// The subscription handle owned by this subscriber.
    #[must_use]
    pub fn subscription(&self) -> Subscription {
        self.state.subscription.clone()
    }

    /// Builds an observer that hands each upstream value to `on_next` together with
    /// this subscriber, and passes upstream errors and completion straight through.
    pub fn forwarding<U, F>(&self, on_next: F) -> Forward<U, T, F>
    where
        F: Fn(&Subscriber<T>, U),
    {
        Forward {
            downstream: self.clone(),
            on_next,
            _marker: PhantomData,
        }
    }
}

impl<T: 'static> Observer<T> for Subscriber<T> {
    fn on_next(&self, value: T) {
        self.next(value);
    }

    fn on_error(&self, error: RillError) {
        self.error(error);
    }

    fn on_complete(&self) {
        self.complete();
    }
}

/// Observer produced by [`Subscriber::forwarding`].
pub struct Forward<U, T, F> {
    downstream: Subscriber<T>,
    on_next: F,
    _marker: PhantomData<fn(U)>,
}

impl<U, T, F> Observer<U> for Forward<U, T, F>
where
    T: 'static,
    F: Fn(&Subscriber<T>, U),
{
    fn on_next(&self, value: U) {
        if !self.downstream.is_closed() {
            (self.on_next)(&self.downstream, value);
        }
    }

    fn on_error(&self, error: RillError) {
        self.downstream.error(error);
    }

    fn on_complete(&self) {
        self.downstream.complete();
    }
}
