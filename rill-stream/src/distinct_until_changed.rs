// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::distinct_until_changed_by::DistinctUntilChangedByExt;
use rill_core::Observable;

/// Extension trait providing the `distinct_until_changed` operator.
pub trait DistinctUntilChangedExt<T> {
    /// Suppresses values equal to the last emitted one.
    ///
    /// The first value is always emitted. The comparison is against the last
    /// *emitted* value, so `[a, a, b, b, a]` yields `[a, b, a]`.
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
    /// Observable::of(vec![1, 1, 2, 2, 2, 3, 2])
    ///     .distinct_until_changed()
    ///     .subscribe_next(move |v| sink.borrow_mut().push(v));
    ///
    /// assert_eq!(*seen.borrow(), vec![1, 2, 3, 2]);
    /// ```
    fn distinct_until_changed(self) -> Observable<T>;
}

impl<T> DistinctUntilChangedExt<T> for Observable<T>
where
    T: Clone + PartialEq + 'static,
{
    fn distinct_until_changed(self) -> Observable<T> {
        self.distinct_until_changed_by(|previous, current| previous == current)
    }
}
