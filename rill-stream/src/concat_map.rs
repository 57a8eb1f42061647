// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flatten::{flatten, FlattenPolicy};
use rill_core::Observable;

/// Extension trait providing the `concat_map` operator.
pub trait ConcatMapExt<A> {
    /// Projects each value to an observable and runs those observables one at a time,
    /// strictly in arrival order.
    ///
    /// A value arriving while an inner observable runs is queued; its inner starts
    /// only after every earlier inner has completed. Use it for writes that must not
    /// overlap.
    fn concat_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static;
}

impl<A: 'static> ConcatMapExt<A> for Observable<A> {
    fn concat_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static,
    {
        flatten(self, FlattenPolicy::Concat, project)
    }
}
