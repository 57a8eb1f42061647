// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flatten::{flatten, FlattenPolicy};
use rill_core::Observable;

/// Extension trait providing the `switch_map` operator.
pub trait SwitchMapExt<A> {
    /// Projects each value to an observable, cancelling the previous inner first.
    ///
    /// At most one inner observable is active at any time, so only the latest
    /// request can deliver results; stale in-flight work is unsubscribed (and, for
    /// external sources, aborted).
    ///
    /// # Example
    ///
    /// ```
    /// use rill_core::Hub;
    /// use rill_stream::prelude::*;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let terms = Hub::<&str>::new();
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    /// let sink = seen.clone();
    ///
    /// let _subscription = terms
    ///     .observable()
    ///     .switch_map(|term| rill_core::Observable::of(vec![term.len()]))
    ///     .subscribe_next(move |n| sink.borrow_mut().push(n));
    ///
    /// terms.next("rx").unwrap();
    /// terms.next("rust").unwrap();
    ///
    /// assert_eq!(*seen.borrow(), vec![2, 4]);
    /// ```
    fn switch_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static;
}

impl<A: 'static> SwitchMapExt<A> for Observable<A> {
    fn switch_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static,
    {
        flatten(self, FlattenPolicy::Switch, project)
    }
}
