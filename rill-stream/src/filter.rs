// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, Teardown};
use std::rc::Rc;

/// Extension trait providing the `filter` operator.
pub trait FilterExt<T> {
    /// Forwards only the values for which `predicate` holds.
    ///
    /// Errors and completion are never held back.
    fn filter<P>(self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + 'static;
}

impl<T: 'static> FilterExt<T> for Observable<T> {
    fn filter<P>(self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        Observable::new(move |subscriber| {
            let predicate = Rc::clone(&predicate);
            let upstream = self.subscribe(subscriber.forwarding(move |downstream, value| {
                if predicate(&value) {
                    downstream.next(value);
                }
            }));
            Teardown::from(upstream)
        })
    }
}
