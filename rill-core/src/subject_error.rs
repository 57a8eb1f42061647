// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to hub operations (lifecycle and broadcasting).
///
/// These are distinct from stream errors: they are returned to the caller pushing
/// into a hub, never delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The hub has terminated and cannot accept new events.
    #[error("Hub is closed")]
    Closed,
}
