// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flatten::{flatten, FlattenPolicy};
use rill_core::Observable;

/// Extension trait providing the `exhaust_map` operator.
pub trait ExhaustMapExt<A> {
    /// Projects a value to an observable only when no inner observable is active.
    ///
    /// Values arriving while an inner runs are dropped, not queued.
    fn exhaust_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static;
}

impl<A: 'static> ExhaustMapExt<A> for Observable<A> {
    fn exhaust_map<B, F>(self, project: F) -> Observable<B>
    where
        B: 'static,
        F: Fn(A) -> Observable<B> + 'static,
    {
        flatten(self, FlattenPolicy::Exhaust, project)
    }
}
