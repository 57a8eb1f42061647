// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, Teardown};

/// Extension trait providing the `start_with` operator.
pub trait StartWithExt<T> {
    /// Emits `seed` synchronously on subscription, before attaching to the source.
    fn start_with(self, seed: T) -> Observable<T>;
}

impl<T: Clone + 'static> StartWithExt<T> for Observable<T> {
    fn start_with(self, seed: T) -> Observable<T> {
        Observable::new(move |subscriber| {
            subscriber.next(seed.clone());
            if subscriber.is_closed() {
                return Teardown::empty();
            }
            Teardown::from(self.subscribe(subscriber))
        })
    }
}
