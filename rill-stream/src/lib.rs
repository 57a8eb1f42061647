// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators for Rill observables.
//!
//! Every operator is a function from `Observable<A>` to `Observable<B>`, provided
//! through an extension trait. Nothing runs when a pipeline is built: subscribing to
//! the output subscribes to the source, and unsubscribing the output unsubscribes
//! every subscription it was composed from.
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](MapExt::map)** / **[`try_map`](MapExt::try_map)**
//! - **[`filter`](FilterExt::filter)**
//! - **[`tap`](TapExt::tap)** / **[`try_tap`](TapExt::try_tap)**, **[`debug`](DebugExt::debug)**
//! - **[`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed)**
//! - **[`start_with`](StartWithExt::start_with)**
//!
//! ### Error handling and lifecycle
//!
//! - **[`catch_error`](CatchErrorExt::catch_error)**: switch to a fallback on error
//! - **[`finalize`](FinalizeExt::finalize)**: run an action once when a subscription ends
//!
//! ### Flattening
//!
//! | Operator | Outer value while an inner runs |
//! |---|---|
//! | [`concat_map`](ConcatMapExt::concat_map) | queued |
//! | [`merge_map`](MergeMapExt::merge_map) | subscribed immediately |
//! | [`switch_map`](SwitchMapExt::switch_map) | previous inner cancelled |
//! | [`exhaust_map`](ExhaustMapExt::exhaust_map) | ignored |
//!
//! ### Multicast
//!
//! - **[`share`](ShareExt::share)**: one execution for concurrent observers
//! - **[`share_replay`](ShareReplayExt::share_replay)**: one execution, replayed to late observers
//!
//! Timer-based operators (`debounce`, `delay`, `retry_with_delay`) live in
//! `rill-stream-time`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod catch_error;
pub mod combine;
pub mod concat_map;
pub mod debug;
pub mod distinct_until_changed;
pub mod distinct_until_changed_by;
pub mod exhaust_map;
pub mod filter;
pub mod finalize;
pub mod flatten;
pub mod map;
pub mod merge_map;
pub mod prelude;
pub mod share;
pub mod share_replay;
pub mod start_with;
pub mod switch_map;
pub mod tap;

pub use self::catch_error::CatchErrorExt;
pub use self::combine::{concat, merge};
pub use self::concat_map::ConcatMapExt;
pub use self::debug::{DebugConfig, DebugExt, LoggingLevel};
pub use self::distinct_until_changed::DistinctUntilChangedExt;
pub use self::distinct_until_changed_by::DistinctUntilChangedByExt;
pub use self::exhaust_map::ExhaustMapExt;
pub use self::filter::FilterExt;
pub use self::finalize::FinalizeExt;
pub use self::flatten::{flatten, FlattenPolicy};
pub use self::map::MapExt;
pub use self::merge_map::MergeMapExt;
pub use self::share::ShareExt;
pub use self::share_replay::ShareReplayExt;
pub use self::start_with::StartWithExt;
pub use self::switch_map::SwitchMapExt;
pub use self::tap::TapExt;
