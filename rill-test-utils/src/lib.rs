// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Rill workspace.
//!
//! - [`TestObserver`]: records every event of a subscription.
//! - [`MockTransport`]: scripted transport with latency, call counting and
//!   cancellation tracking, driven by any scheduler.
//! - [`fixtures`]: course and lesson payloads in the shape served by the backend.
//! - [`helpers`]: scheduler setup and synchronous collection.
//!
//! # Example
//!
//! ```rust
//! use rill_core::Observable;
//! use rill_test_utils::TestObserver;
//!
//! let (observer, _subscription) = TestObserver::attach(&Observable::of(vec![1, 2]));
//!
//! assert_eq!(observer.values(), vec![1, 2]);
//! assert!(observer.is_completed());
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod fixtures;
pub mod helpers;
pub mod mock_transport;
pub mod test_observer;

pub use helpers::{assert_completed_with, collect_sync, emit_after, values_sync, virtual_scheduler};
pub use mock_transport::MockTransport;
pub use test_observer::TestObserver;
