// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_stream_time::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a [`Store`](crate::Store) fetches from and how it retries.
///
/// ```
/// use rill_store::StoreConfig;
/// use rill_stream_time::RetryPolicy;
/// use std::time::Duration;
///
/// let config: StoreConfig = serde_json::from_str(r#"{ "base_url": "http://localhost:9000" }"#).unwrap();
/// assert_eq!(config.collection_path, "/api/courses");
///
/// let config = config.with_retry(RetryPolicy::fixed(Duration::from_millis(500)).with_max_attempts(5));
/// assert_eq!(config.retry.max_attempts, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    /// Path of the collection endpoint; single records live at `{collection_path}/{id}`.
    pub collection_path: String,
    pub retry: RetryPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            collection_path: "/api/courses".to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_collection_path(mut self, path: impl Into<String>) -> Self {
        self.collection_path = path.into();
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Settings of the lesson search pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a search term is considered settled, in milliseconds.
    pub debounce_ms: u64,
    pub page_size: u32,
    pub lessons_path: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 400,
            page_size: 100,
            lessons_path: "/api/lessons".to_string(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}
