// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, Result, Teardown};
use std::rc::Rc;

/// Extension trait providing `map` and `try_map`.
pub trait MapExt<T> {
    /// Forwards `f(value)` for every value; errors and completion pass through untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use rill_core::Observable;
    /// use rill_stream::prelude::*;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    /// let sink = seen.clone();
    /// Observable::of(vec![1, 2, 3])
    ///     .map(|v| v * 10)
    ///     .subscribe_next(move |v| sink.borrow_mut().push(v));
    ///
    /// assert_eq!(*seen.borrow(), vec![10, 20, 30]);
    /// ```
    fn map<U, F>(self, f: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static;

    /// Like [`map`](MapExt::map) with a fallible projection.
    ///
    /// The first `Err` is delivered as the terminal error and the source is
    /// unsubscribed.
    fn try_map<U, F>(self, f: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static;
}

impl<T: 'static> MapExt<T> for Observable<T> {
    fn map<U, F>(self, f: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let f = Rc::new(f);
        Observable::new(move |subscriber| {
            let f = Rc::clone(&f);
            let upstream = self.subscribe(subscriber.forwarding(move |downstream, value| {
                downstream.next(f(value));
            }));
            Teardown::from(upstream)
        })
    }

    fn try_map<U, F>(self, f: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static,
    {
        let f = Rc::new(f);
        Observable::new(move |subscriber| {
            let f = Rc::clone(&f);
            let upstream = self.subscribe(subscriber.forwarding(move |downstream, value| {
                match f(value) {
                    Ok(mapped) => downstream.next(mapped),
                    Err(error) => downstream.error(error),
                }
            }));
            Teardown::from(upstream)
        })
    }
}
