// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::concat_map::ConcatMapExt;
use crate::merge_map::MergeMapExt;
use rill_core::Observable;

/// Subscribes to `sources` one after the other, each once the previous completed.
pub fn concat<T: 'static>(sources: Vec<Observable<T>>) -> Observable<T> {
    Observable::of(sources).concat_map(|source| source)
}

/// Subscribes to all `sources` at once and interleaves their values.
pub fn merge<T: 'static>(sources: Vec<Observable<T>>) -> Observable<T> {
    Observable::of(sources).merge_map(|source| source)
}
