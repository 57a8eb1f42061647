// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator traits.
//!
//! ```
//! use rill_core::Observable;
//! use rill_stream::prelude::*;
//!
//! let _pipeline = Observable::of(vec![" rx ", "rx", "rust"])
//!     .map(|term| term.trim().to_string())
//!     .distinct_until_changed()
//!     .filter(|term| !term.is_empty());
//! ```

pub use crate::catch_error::CatchErrorExt;
pub use crate::combine::{concat, merge};
pub use crate::concat_map::ConcatMapExt;
pub use crate::debug::{DebugConfig, DebugExt, LoggingLevel};
pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::distinct_until_changed_by::DistinctUntilChangedByExt;
pub use crate::exhaust_map::ExhaustMapExt;
pub use crate::filter::FilterExt;
pub use crate::finalize::FinalizeExt;
pub use crate::flatten::FlattenPolicy;
pub use crate::map::MapExt;
pub use crate::merge_map::MergeMapExt;
pub use crate::share::ShareExt;
pub use crate::share_replay::ShareReplayExt;
pub use crate::start_with::StartWithExt;
pub use crate::switch_map::SwitchMapExt;
pub use crate::tap::TapExt;
