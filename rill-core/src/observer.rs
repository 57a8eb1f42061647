// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The three-callback sink attached to an observable.

use crate::error::RillError;
use std::rc::Rc;

/// Receives the events of one subscription.
///
/// After `on_error` or `on_complete` no further callback is invoked for the same
/// subscription; the [`Subscriber`](crate::Subscriber) wrapping the observer enforces
/// this. Callbacks take `&self`: observers that keep state do so through interior
/// mutability, which keeps re-entrant delivery (an observer pushing into the source it
/// listens to) well defined.
pub trait Observer<T> {
    fn on_next(&self, value: T);
    fn on_error(&self, error: RillError);
    fn on_complete(&self);
}

impl<T, O> Observer<T> for Rc<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: RillError) {
        (**self).on_error(error);
    }

    fn on_complete(&self) {
        (**self).on_complete();
    }
}

/// Observer assembled from three closures.
pub struct FnObserver<N, E, C> {
    next: N,
    error: E,
    complete: C,
}

impl<N, E, C> FnObserver<N, E, C> {
    pub fn new(next: N, error: E, complete: C) -> Self {
        Self {
            next,
            error,
            complete,
        }
    }
}

impl<T, N, E, C> Observer<T> for FnObserver<N, E, C>
where
    N: Fn(T),
    E: Fn(RillError),
    C: Fn(),
{
    fn on_next(&self, value: T) {
        (self.next)(value);
    }

    fn on_error(&self, error: RillError) {
        (self.error)(error);
    }

    fn on_complete(&self) {
        (self.complete)();
    }
}
