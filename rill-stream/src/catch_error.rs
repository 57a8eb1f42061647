// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{FnObserver, Observable, RillError, SerialSubscription, Teardown};
use std::cell::Cell;
use std::rc::Rc;

/// Extension trait providing the `catch_error` operator.
pub trait CatchErrorExt<T> {
    /// Replaces a failed source with a fallback.
    ///
    /// On the first upstream error the source is unsubscribed and `handler(error)`
    /// is subscribed in its place. From then on the output mirrors the fallback,
    /// including a rethrown error (`Observable::throw_error`). Values emitted before
    /// the error are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use rill_core::{Observable, RillError};
    /// use rill_stream::prelude::*;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    /// let sink = seen.clone();
    /// Observable::<Vec<u32>>::throw_error(RillError::transport("offline"))
    ///     .catch_error(|_| Observable::just(Vec::new()))
    ///     .subscribe_next(move |v| sink.borrow_mut().push(v));
    ///
    /// assert_eq!(*seen.borrow(), vec![Vec::<u32>::new()]);
    /// ```
    fn catch_error<F>(self, handler: F) -> Observable<T>
    where
        F: Fn(RillError) -> Observable<T> + 'static;
}

impl<T: 'static> CatchErrorExt<T> for Observable<T> {
    fn catch_error<F>(self, handler: F) -> Observable<T>
    where
        F: Fn(RillError) -> Observable<T> + 'static,
    {
        let handler = Rc::new(handler);
        Observable::new(move |subscriber| {
            let active = SerialSubscription::new();
            let failed = Rc::new(Cell::new(false));

            let on_next = {
                let subscriber = subscriber.clone();
                move |value| subscriber.next(value)
            };
            let on_error = {
                let (subscriber, active, failed) = (subscriber.clone(), active.clone(), failed.clone());
                let handler = Rc::clone(&handler);
                move |error| {
                    failed.set(true);
                    let fallback = handler(error);
                    active.set(fallback.subscribe(subscriber.clone()));
                }
            };
            let on_complete = {
                let subscriber = subscriber.clone();
                move || subscriber.complete()
            };

            let upstream = self.subscribe(FnObserver::new(on_next, on_error, on_complete));
            if !failed.get() {
                active.set(upstream);
            }
            Teardown::from(active)
        })
    }
}
