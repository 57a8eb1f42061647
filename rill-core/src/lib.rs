// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core primitives of the Rill reactive engine.
//!
//! - [`Observable`]: a lazy, re-executable definition of a push-based sequence.
//! - [`Observer`]: the `on_next`/`on_error`/`on_complete` sink.
//! - [`Subscriber`]: the producer-facing guard enforcing the observer contract.
//! - [`Subscription`]: the cancellation handle of one attachment.
//! - [`Hub`] / [`StatefulHub`]: multicast adaptors (hot, and hot with replay).
//!
//! The engine assumes a single logical thread: state lives in `Rc`/`RefCell`, and
//! delivery is synchronous except where a scheduler introduces a suspension point
//! (see `rill-runtime`).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod error;
pub mod hub;
pub mod into_stream;
pub mod notification;
pub mod observable;
pub mod observer;
pub mod stream_item;
pub mod subject_error;
pub mod subscriber;
pub mod subscription;

pub use self::error::{Result, RillError};
pub use self::hub::{Hub, StatefulHub};
pub use self::into_stream::{IntoStream, ObservableStream};
pub use self::notification::Notification;
pub use self::observable::Observable;
pub use self::observer::{FnObserver, Observer};
pub use self::stream_item::StreamItem;
pub use self::subject_error::SubjectError;
pub use self::subscriber::{Forward, Subscriber};
pub use self::subscription::{SerialSubscription, Subscription, Teardown};
