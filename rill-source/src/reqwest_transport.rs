// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::request::{Method, Request, Response};
use crate::transport::Transport;
use async_trait::async_trait;
use rill_core::{Result, RillError};
use serde_json::Value;

/// [`Transport`] backed by a `reqwest` client.
///
/// Requires a Tokio runtime; pair it with `TokioScheduler`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RillError::transport(format!("{request}: {e}")))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RillError::transport(format!("{request}: {e}")))?;

        let body = if bytes.is_empty() {
            Value::Null
        } else if status.is_success() {
            serde_json::from_slice(&bytes)
                .map_err(|e| RillError::projection(format!("{request}: {e}")))?
        } else {
            // Error pages are often not JSON; the status is what matters.
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Ok(Response::new(status.as_u16(), body))
    }
}
