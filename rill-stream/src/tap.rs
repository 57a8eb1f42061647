// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, Result, Teardown};
use std::rc::Rc;

/// Extension trait providing side-effect operators.
///
/// `tap` observes values without changing them. Use it for logging, metrics or
/// bookkeeping that must not alter the sequence.
pub trait TapExt<T> {
    /// Invokes `effect` with every value, then forwards the value unchanged.
    fn tap<F>(self, effect: F) -> Observable<T>
    where
        F: Fn(&T) + 'static;

    /// Like [`tap`](TapExt::tap) with a fallible effect; an `Err` terminates the
    /// sequence with that error instead of forwarding the value.
    fn try_tap<F>(self, effect: F) -> Observable<T>
    where
        F: Fn(&T) -> Result<()> + 'static;
}

impl<T: 'static> TapExt<T> for Observable<T> {
    fn tap<F>(self, effect: F) -> Observable<T>
    where
        F: Fn(&T) + 'static,
    {
        self.try_tap(move |value| {
            effect(value);
            Ok(())
        })
    }

    fn try_tap<F>(self, effect: F) -> Observable<T>
    where
        F: Fn(&T) -> Result<()> + 'static,
    {
        let effect = Rc::new(effect);
        Observable::new(move |subscriber| {
            let effect = Rc::clone(&effect);
            let upstream = self.subscribe(subscriber.forwarding(move |downstream, value| {
                match effect(&value) {
                    Ok(()) => downstream.next(value),
                    Err(error) => downstream.error(error),
                }
            }));
            Teardown::from(upstream)
        })
    }
}
