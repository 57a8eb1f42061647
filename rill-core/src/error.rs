// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Rill reactive engine
//!
//! Every failure an observable can report travels through the `on_error` channel as a
//! [`RillError`]. The engine itself never inspects the variant; only recovery stages
//! (`catch_error`, `retry_with_delay`) and callers look at it.
//!
//! # Examples
//!
//! ```
//! use rill_core::{RillError, Result};
//!
//! fn project() -> Result<()> {
//!     Err(RillError::projection("payload is not an object"))
//! }
//!
//! assert!(project().is_err());
//! ```

/// Root error type for all Rill operations
///
/// The type is `Clone` because a hub delivers the same terminal error to every
/// attached observer, and a stateful hub replays it to late attachments.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RillError {
    /// Stream processing encountered an error
    ///
    /// General purpose variant for failures that fit no other category.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// The external operation could not be carried out (DNS, refused connection, ...)
    #[error("Transport error: {context}")]
    Transport {
        /// Description reported by the transport
        context: String,
    },

    /// The external operation completed with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// Status code reported by the endpoint
        status: u16,
        /// The requested url
        url: String,
    },

    /// A payload did not have the expected shape
    #[error("Projection error: {context}")]
    Projection {
        /// What could not be projected
        context: String,
    },

    /// A fallible user callback (`try_map`, `try_tap`, ...) returned an error
    #[error("Callback error: {context}")]
    CallbackError {
        /// Message produced by the callback
        context: String,
    },

    /// An update referenced a record that is not cached
    #[error("Record not found: {id}")]
    RecordNotFound {
        /// Identifier of the missing record
        id: String,
    },

}

impl RillError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a transport error with the given context
    pub fn transport(context: impl Into<String>) -> Self {
        Self::Transport {
            context: context.into(),
        }
    }

    /// Create a non-success status error
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    /// Create a projection error with the given context
    pub fn projection(context: impl Into<String>) -> Self {
        Self::Projection {
            context: context.into(),
        }
    }

    /// Create a callback error with the given context
    pub fn callback(context: impl Into<String>) -> Self {
        Self::CallbackError {
            context: context.into(),
        }
    }

    /// Create a record-not-found error
    pub fn record_not_found(id: impl ToString) -> Self {
        Self::RecordNotFound { id: id.to_string() }
    }

    /// Check if this is a recoverable error
    ///
    /// Transport failures and server-side statuses (5xx, 408, 429) are transient and
    /// may succeed on retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            _ => false,
        }
    }

    /// Check if this error indicates a permanent failure
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        !self.is_recoverable()
    }
}

/// Specialized Result type for Rill operations
pub type Result<T> = std::result::Result<T, RillError>;
