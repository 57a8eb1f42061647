// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::bridge::{create_source, from_future};
use crate::request::{Request, Response};
use crate::transport::TransportRef;
use rill_core::{Observable, RillError};
use rill_runtime::SchedulerRef;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON-over-HTTP helpers rooted at a base URL.
///
/// Each method returns a cold observable: nothing is sent until it is subscribed, and
/// every subscription sends its own request.
#[derive(Clone)]
pub struct HttpSource {
    transport: TransportRef,
    scheduler: SchedulerRef,
    base_url: String,
}

impl HttpSource {
    pub fn new(transport: TransportRef, scheduler: SchedulerRef, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            scheduler,
            base_url: base_url.into(),
        }
    }

    pub fn scheduler(&self) -> &SchedulerRef {
        &self.scheduler
    }

    /// Absolute URL of `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Sends an arbitrary request; `request.url` is taken as a path below the base URL.
    pub fn request(&self, mut request: Request) -> Observable<Response> {
        request.url = self.url(&request.url);
        create_source(self.transport.clone(), self.scheduler.clone(), request)
    }

    pub fn get(&self, path: &str, query: &[(&str, String)]) -> Observable<Response> {
        let request = query
            .iter()
            .fold(Request::get(path), |request, (key, value)| {
                request.with_query(*key, value)
            });
        self.request(request)
    }

    /// `GET`s `path` and decodes the body as `T`.
    ///
    /// A body of the wrong shape is delivered as [`RillError::Projection`].
    pub fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Observable<T>
    where
        T: DeserializeOwned + 'static,
    {
        let transport = self.transport.clone();
        let request = query
            .iter()
            .fold(Request::get(self.url(path)), |request, (key, value)| {
                request.with_query(*key, value)
            });

        from_future(self.scheduler.clone(), move || {
            let transport = transport.clone();
            let request = request.clone();
            async move {
                debug!("executing {}", request);
                let response = transport.execute(request.clone()).await?;
                if !response.is_success() {
                    return Err(RillError::status(response.status, request.url));
                }
                response.json::<T>()
            }
        })
    }

    /// `PUT`s `body` as JSON to `path`.
    pub fn put_json(&self, path: &str, body: Value) -> Observable<Response> {
        self.request(Request::put_json(path, body))
    }
}
