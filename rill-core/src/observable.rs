// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, re-executable, push-based producers.
//!
//! An [`Observable`] is a *definition* of how to produce values over time. It holds no
//! running state: every call to [`subscribe`](Observable::subscribe) runs the producer
//! again, independently of any other subscription (cold semantics). Sharing one
//! execution between several observers is the job of the hubs in
//! [`hub`](crate::hub) and of the `share`/`share_replay` operators.
//!
//! ## Example
//!
//! ```
//! use rill_core::{Observable, Teardown};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let numbers = Observable::new(|subscriber| {
//!     subscriber.next(1);
//!     subscriber.next(2);
//!     subscriber.complete();
//!     Teardown::empty()
//! });
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! numbers.subscribe_next(move |v| sink.borrow_mut().push(v));
//!
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! ```

use crate::error::{Result, RillError};
use crate::observer::{FnObserver, Observer};
use crate::subscriber::Subscriber;
use crate::subscription::{Subscription, Teardown};
use std::rc::Rc;

type Producer<T> = dyn Fn(Subscriber<T>) -> Result<Teardown>;

/// A lazy, push-based sequence of values.
///
/// Cloning an observable clones the definition, not a running execution.
pub struct Observable<T> {
    producer: Rc<Producer<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Creates an observable from a producer function.
    ///
    /// The producer runs synchronously on every subscription. It emits through the
    /// given [`Subscriber`] and returns the teardown to run when the subscription
    /// closes.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(Subscriber<T>) -> Teardown + 'static,
    {
        Self {
            producer: Rc::new(move |subscriber| Ok(producer(subscriber))),
        }
    }

    /// Creates an observable from a fallible producer function.
    ///
    /// An `Err` returned by the producer is delivered to the observer's `on_error`
    /// instead of escaping from `subscribe`.
    pub fn try_new<F>(producer: F) -> Self
    where
        F: Fn(Subscriber<T>) -> Result<Teardown> + 'static,
    {
        Self {
            producer: Rc::new(producer),
        }
    }

    /// Attaches an observer and runs the producer.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T> + 'static,
    {
        let subscriber = Subscriber::new(observer);
        self.attach(&subscriber);
        subscriber.subscription()
    }

    /// Attaches three callbacks.
    pub fn subscribe_with<N, E, C>(&self, next: N, error: E, complete: C) -> Subscription
    where
        N: Fn(T) + 'static,
        E: Fn(RillError) + 'static,
        C: Fn() + 'static,
    {
        self.subscribe(FnObserver::new(next, error, complete))
    }

    /// Attaches a value callback, ignoring errors and completion.
    pub fn subscribe_next<N>(&self, next: N) -> Subscription
    where
        N: Fn(T) + 'static,
    {
        self.subscribe_with(next, |_| {}, || {})
    }

    /// Runs the producer for an existing subscriber.
    pub fn attach(&self, subscriber: &Subscriber<T>) {
        match (self.producer)(subscriber.clone()) {
            Ok(teardown) => subscriber.add(teardown),
            Err(error) => subscriber.error(error),
        }
    }

    /// An observable that completes immediately.
    pub fn empty() -> Self {
        Self::new(|subscriber| {
            subscriber.complete();
            Teardown::empty()
        })
    }

    /// An observable that never emits and never terminates.
    pub fn never() -> Self {
        Self::new(|_| Teardown::empty())
    }

    /// An observable that fails immediately with `error`, without emitting.
    pub fn throw_error(error: RillError) -> Self {
        Self::new(move |subscriber| {
            subscriber.error(error.clone());
            Teardown::empty()
        })
    }

    /// Builds a fresh observable for every subscription.
    ///
    /// Side effects of `factory` happen at subscription time, not at definition time.
    pub fn defer<F>(factory: F) -> Self
    where
        F: Fn() -> Observable<T> + 'static,
    {
        Self::new(move |subscriber| {
            factory().attach(&subscriber);
            Teardown::empty()
        })
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Emits `value`, then completes.
    pub fn just(value: T) -> Self {
        Self::of(vec![value])
    }

    /// Emits every value of `values` in order, then completes.
    pub fn of(values: Vec<T>) -> Self {
        Self::from_iter(values)
    }

    /// Emits every item of a re-iterable collection, then completes.
    ///
    /// Emission stops early if the subscription is disposed in between.
    pub fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
    {
        Self::new(move |subscriber| {
            for item in items.clone() {
                if subscriber.is_closed() {
                    break;
                }
                subscriber.next(item);
            }
            subscriber.complete();
            Teardown::empty()
        })
    }
}
