// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the timer-based operator traits.

pub use crate::debounce::DebounceExt;
pub use crate::delay::DelayExt;
pub use crate::retry_policy::RetryPolicy;
pub use crate::retry_with_delay::RetryWithDelayExt;
pub use crate::sources::{interval, timer};
