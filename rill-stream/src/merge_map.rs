// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flatten::{flatten, FlattenPolicy};
use rill_core::Observable;

/// Extension trait providing the `merge_map` operator.
pub trait MergeMapExt<A> {
    /// Projects each value to an observable and subscribes to it immediately.
    ///
    /// Inner emissions are interleaved as they occur.
    fn merge_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static;
}

impl<A: 'static> MergeMapExt<A> for Observable<A> {
    fn merge_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static,
    {
        flatten(self, FlattenPolicy::Merge, project)
    }
}
