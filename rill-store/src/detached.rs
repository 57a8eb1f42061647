// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Hub, Observable, Teardown};
use std::cell::RefCell;
use std::rc::Rc;

/// Subscribes to `source` right away and replays its outcome to later attachments.
///
/// The work runs whether or not anyone attaches to the returned observable, and
/// attaching never starts it a second time.
pub(crate) fn run_detached<T: Clone + 'static>(source: &Observable<T>) -> Observable<T> {
    let recorded = Rc::new(RefCell::new(Vec::new()));
    let hub = Hub::new();

    let (values, on_next) = (Rc::clone(&recorded), hub.clone());
    let (on_error, on_complete) = (hub.clone(), hub.clone());
    let _detached = source.subscribe_with(
        move |value: T| {
            values.borrow_mut().push(value.clone());
            let _ = on_next.next(value);
        },
        move |error| {
            warn!("detached write failed: {}", error);
            let _ = on_error.error(error);
        },
        move || on_complete.complete(),
    );

    Observable::new(move |subscriber| {
        let replay = recorded.borrow().clone();
        for value in replay {
            subscriber.next(value);
        }
        Teardown::from(hub.observable().subscribe(subscriber))
    })
}
