// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from push-based observables to pull-based `futures::Stream`s.

use crate::observable::Observable;
use crate::observer::FnObserver;
use crate::stream_item::StreamItem;
use crate::subscription::Subscription;
use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A `futures::Stream` fed by an observable subscription.
///
/// Values arrive as `StreamItem::Value`, the terminal error as `StreamItem::Error`,
/// and completion ends the stream. Dropping the stream disposes the subscription.
pub struct ObservableStream<T> {
    receiver: UnboundedReceiver<StreamItem<T>>,
    subscription: Subscription,
}

impl<T> ObservableStream<T> {
    /// The subscription feeding this stream.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl<T> Stream for ObservableStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

impl<T> Drop for ObservableStream<T> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

/// Converts an observable into a `futures::Stream`.
pub trait IntoStream<T> {
    /// Subscribes and buffers every event in an unbounded channel.
    fn into_stream(self) -> ObservableStream<T>;
}

impl<T: 'static> IntoStream<T> for Observable<T> {
    fn into_stream(self) -> ObservableStream<T> {
        let (tx, receiver) = mpsc::unbounded();
        let (tx_error, tx_complete) = (tx.clone(), tx.clone());

        let subscription = self.subscribe(FnObserver::new(
            move |value| {
                let _ = tx.unbounded_send(StreamItem::Value(value));
            },
            move |error| {
                let _ = tx_error.unbounded_send(StreamItem::Error(error));
                tx_error.close_channel();
            },
            move || tx_complete.close_channel(),
        ));

        ObservableStream {
            receiver,
            subscription,
        }
    }
}
