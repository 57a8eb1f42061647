// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Notification, Observable, Observer, RillError, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// Observer recording every event it receives.
///
/// Clones share the same record, so a test keeps one clone and subscribes the other.
pub struct TestObserver<T> {
    events: Rc<RefCell<Vec<Notification<T>>>>,
}

impl<T> Clone for TestObserver<T> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<T> Default for TestObserver<T> {
    fn default() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone + 'static> TestObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a fresh recorder to `observable`.
    pub fn attach(observable: &Observable<T>) -> (Self, Subscription) {
        let observer = Self::new();
        let subscription = observable.subscribe(observer.clone());
        (observer, subscription)
    }

    pub fn events(&self) -> Vec<Notification<T>> {
        self.events.borrow().clone()
    }

    pub fn values(&self) -> Vec<T> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| event.value().cloned())
            .collect()
    }

    pub fn errors(&self) -> Vec<RillError> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Notification::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_completed(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|event| matches!(event, Notification::Complete))
    }

    pub fn is_errored(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|event| matches!(event, Notification::Error(_)))
    }

    pub fn is_terminated(&self) -> bool {
        self.is_completed() || self.is_errored()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl<T> Observer<T> for TestObserver<T> {
    fn on_next(&self, value: T) {
        self.events.borrow_mut().push(Notification::Next(value));
    }

    fn on_error(&self, error: RillError) {
        self.events.borrow_mut().push(Notification::Error(error));
    }

    fn on_complete(&self) {
        self.events.borrow_mut().push(Notification::Complete);
    }
}
