// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation handles for active attachments.
//!
//! A [`Subscription`] owns the teardown actions of one attachment between an observer
//! and an observable. Unsubscribing runs every registered teardown exactly once, no
//! matter whether it was triggered by completion, by an error, or by the caller.
//! Repeated unsubscription is a no-op.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Cleanup logic returned by a producer.
///
/// A teardown is run once, when the subscription it belongs to is closed.
#[must_use = "a teardown does nothing unless it is attached to a subscription"]
pub struct Teardown {
    action: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    /// Creates a teardown running `action` on unsubscription.
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// A teardown with nothing to clean up.
    pub fn empty() -> Self {
        Self { action: None }
    }

    pub(crate) fn run(self) {
        if let Some(action) = self.action {
            action();
        }
    }
}

impl From<Subscription> for Teardown {
    fn from(subscription: Subscription) -> Self {
        Teardown::new(move || subscription.unsubscribe())
    }
}

impl From<SerialSubscription> for Teardown {
    fn from(serial: SerialSubscription) -> Self {
        Teardown::new(move || serial.unsubscribe())
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("empty", &self.action.is_none())
            .finish()
    }
}

#[derive(Default)]
struct SubscriptionState {
    closed: Cell<bool>,
    teardowns: RefCell<Vec<Teardown>>,
}

/// Handle for one active attachment.
///
/// Cloning yields another handle to the same attachment.
#[derive(Clone, Default)]
pub struct Subscription {
    state: Rc<SubscriptionState>,
}

impl Subscription {
    /// Creates an open subscription with no teardown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an open subscription that runs `action` when unsubscribed.
    pub fn from_fn(action: impl FnOnce() + 'static) -> Self {
        let subscription = Self::new();
        subscription.add(Teardown::new(action));
        subscription
    }

    /// Creates a subscription that is already closed.
    #[must_use]
    pub fn closed() -> Self {
        let subscription = Self::new();
        subscription.state.closed.set(true);
        subscription
    }

    /// Registers a teardown.
    ///
    /// If the subscription is already closed the teardown runs immediately.
    pub fn add(&self, teardown: impl Into<Teardown>) {
        let teardown = teardown.into();
        if self.is_closed() {
            teardown.run();
        } else {
            self.state.teardowns.borrow_mut().push(teardown);
        }
    }

    /// Closes the subscription and runs every registered teardown once.
    pub fn unsubscribe(&self) {
        if self.state.closed.replace(true) {
            return;
        }

        let teardowns = std::mem::take(&mut *self.state.teardowns.borrow_mut());
        for teardown in teardowns {
            teardown.run();
        }
    }

    /// Returns `true` once the subscription has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.closed.get()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.is_closed())
            .field("teardowns", &self.state.teardowns.borrow().len())
            .finish()
    }
}

#[derive(Default)]
struct SerialState {
    closed: Cell<bool>,
    current: RefCell<Option<Subscription>>,
}

/// Holds at most one inner subscription at a time.
///
/// Setting a new inner subscription unsubscribes the previous one. Once the serial
/// subscription itself is closed, anything set on it is unsubscribed immediately.
#[derive(Clone, Default)]
pub struct SerialSubscription {
    state: Rc<SerialState>,
}

impl SerialSubscription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current inner subscription, unsubscribing the previous one.
    pub fn set(&self, subscription: Subscription) {
        if self.is_closed() {
            subscription.unsubscribe();
            return;
        }

        let previous = self.state.current.borrow_mut().replace(subscription);
        if let Some(previous) = previous {
            previous.unsubscribe();
        }
    }

    /// Unsubscribes the current inner subscription without closing the holder.
    pub fn clear(&self) {
        let previous = self.state.current.borrow_mut().take();
        if let Some(previous) = previous {
            previous.unsubscribe();
        }
    }

    pub fn unsubscribe(&self) {
        if self.state.closed.replace(true) {
            return;
        }
        self.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.closed.get()
    }
}

impl fmt::Debug for SerialSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialSubscription")
            .field("closed", &self.is_closed())
            .finish()
    }
}
