// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Progress of the store's collection fetch.
///
/// `Idle -> Fetching -> Populated | Failed`; a retry moves `Failed` back to
/// `Fetching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching,
    Populated,
    Failed,
}

/// Outcome of a successful write to the record endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Id of the written record, as it appears in the URL.
    pub id: String,
    pub status: u16,
}
