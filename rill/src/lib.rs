// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rill
//!
//! Push-based reactive observables for a single logical thread.
//!
//! ## Overview
//!
//! An [`Observable`] is a lazy definition of a sequence of values: nothing runs until
//! it is subscribed, every subscription runs it again, and disposing the returned
//! [`Subscription`] cancels everything the subscription started, down to an
//! in-flight HTTP request. Hubs turn one execution into many deliveries.
//!
//! The workspace is split by concern:
//!
//! - `rill-core`: observables, observers, subscriptions, hubs, errors
//! - `rill-runtime`: the [`Scheduler`] behind every timer and async task
//! - `rill-stream`: transformation, flattening and multicast operators
//! - `rill-stream-time`: `debounce`, `delay`, `retry_with_delay`, `timer`, `interval`
//! - `rill-source`: the cancellable bridge from a [`Transport`] to observables
//! - `rill-store`: a shared, retried, cached record [`Store`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rill::prelude::*;
//!
//! let terms = Observable::of(vec![" rx ", "rx", "rust", ""])
//!     .map(|term| term.trim().to_string())
//!     .filter(|term| !term.is_empty())
//!     .distinct_until_changed();
//!
//! let _subscription = terms.subscribe_next(|term| println!("{term}"));
//! ```

pub use rill_core::{
    FnObserver, Hub, IntoStream, Notification, Observable, Observer, Result, RillError,
    SerialSubscription, StatefulHub, StreamItem, SubjectError, Subscriber, Subscription,
    Teardown,
};
pub use rill_runtime::{Scheduler, SchedulerRef, VirtualScheduler};
#[cfg(feature = "runtime-tokio")]
pub use rill_runtime::TokioScheduler;
pub use rill_source::{create_source, from_future, HttpSource, Method, Request, Response, Transport, TransportRef};
#[cfg(feature = "http-reqwest")]
pub use rill_source::ReqwestTransport;
pub use rill_store::{
    auto_save, Category, Course, FetchState, Lesson, Record, SearchConfig, SearchPipeline, Store,
    StoreConfig, WriteResult,
};
pub use rill_stream::{DebugConfig, FlattenPolicy, LoggingLevel};
pub use rill_stream_time::{interval, timer, RetryPolicy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rill_core::{Hub, IntoStream, Observable, Observer, RillError, StatefulHub, Subscription};
    pub use rill_runtime::{Scheduler, SchedulerRef};
    pub use rill_stream::prelude::*;
    pub use rill_stream_time::prelude::*;
}
