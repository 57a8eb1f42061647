// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wrapping one asynchronous operation into a cold observable.
//!
//! Every subscription starts a brand-new operation on the scheduler. The teardown of
//! the subscription aborts the operation if it is still pending; once it has settled
//! the abort is a no-op. A result racing a cancellation is dropped by the subscriber
//! guard.

use crate::request::{Request, Response};
use crate::transport::TransportRef;
use futures::FutureExt;
use rill_core::{Observable, Result, RillError, Teardown};
use rill_runtime::SchedulerRef;
use std::future::Future;

/// Creates an observable that runs the future built by `factory` on every subscription.
///
/// `Ok(value)` is delivered as one value followed by completion, `Err` as one error.
pub fn from_future<T, F, Fut>(scheduler: SchedulerRef, factory: F) -> Observable<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T>> + 'static,
{
    Observable::new(move |subscriber| {
        let operation = factory();
        let sink = subscriber.clone();
        let task = scheduler.spawn(
            async move {
                match operation.await {
                    Ok(value) => {
                        sink.next(value);
                        sink.complete();
                    }
                    Err(error) => sink.error(error),
                }
            }
            .boxed_local(),
        );
        Teardown::from(task)
    })
}

/// Issues `request` through `transport` on every subscription.
///
/// Responses outside the 2xx range are delivered as [`RillError::Status`].
pub fn create_source(
    transport: TransportRef,
    scheduler: SchedulerRef,
    request: Request,
) -> Observable<Response> {
    from_future(scheduler, move || {
        let transport = transport.clone();
        let request = request.clone();
        async move {
            debug!("executing {}", request);
            let response = transport.execute(request.clone()).await?;
            if response.is_success() {
                Ok(response)
            } else {
                Err(RillError::status(response.status, request.url))
            }
        }
    })
}
