// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Observable, Teardown};
use std::rc::Rc;

/// Extension trait providing the `finalize` operator.
pub trait FinalizeExt<T> {
    /// Invokes `action` exactly once per subscription, when it ends.
    ///
    /// Completion, error and external cancellation all end a subscription; whichever
    /// comes first triggers `action`, after the terminal event (if any) has been
    /// delivered downstream.
    fn finalize<F>(self, action: F) -> Observable<T>
    where
        F: Fn() + 'static;
}

impl<T: 'static> FinalizeExt<T> for Observable<T> {
    fn finalize<F>(self, action: F) -> Observable<T>
    where
        F: Fn() + 'static,
    {
        let action = Rc::new(action);
        Observable::new(move |subscriber| {
            let upstream = self.subscribe(subscriber);
            let action = Rc::clone(&action);
            Teardown::new(move || {
                upstream.unsubscribe();
                action();
            })
        })
    }
}
