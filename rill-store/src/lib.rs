// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A shared, retried, cached record store.
//!
//! [`Store`] mediates between one collection endpoint and any number of consumers:
//! it fetches the collection once, retries failed fetches according to a
//! [`RetryPolicy`](rill_stream_time::RetryPolicy), and serves derived views from a
//! replaying hub. [`SearchPipeline`] and [`auto_save`] cover the two input-driven
//! flows of the course pages: debounced lesson search and sequential form saving.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod auto_save;
pub mod config;
mod detached;
mod envelope;
pub mod model;
mod patch;
pub mod search;
pub mod state;
pub mod store;

pub use self::auto_save::auto_save;
pub use self::config::{SearchConfig, StoreConfig};
pub use self::model::{Category, Course, Lesson, Record};
pub use self::search::SearchPipeline;
pub use self::state::{FetchState, WriteResult};
pub use self::store::Store;
