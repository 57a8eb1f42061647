// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, Teardown};
use std::cell::RefCell;
use std::rc::Rc;

/// Extension trait providing `distinct_until_changed_by`.
pub trait DistinctUntilChangedByExt<T> {
    /// Suppresses a value when `same(last_emitted, value)` returns `true`.
    fn distinct_until_changed_by<F>(self, same: F) -> Observable<T>
    where
        F: Fn(&T, &T) -> bool + 'static;
}

impl<T> DistinctUntilChangedByExt<T> for Observable<T>
where
    T: Clone + 'static,
{
    fn distinct_until_changed_by<F>(self, same: F) -> Observable<T>
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        let same = Rc::new(same);
        Observable::new(move |subscriber| {
            let same = Rc::clone(&same);
            let last: RefCell<Option<T>> = RefCell::new(None);
            let upstream = self.subscribe(subscriber.forwarding(move |downstream, value: T| {
                let duplicate = last
                    .borrow()
                    .as_ref()
                    .is_some_and(|previous| same(previous, &value));
                if !duplicate {
                    *last.borrow_mut() = Some(value.clone());
                    downstream.next(value);
                }
            }));
            Teardown::from(upstream)
        })
    }
}
