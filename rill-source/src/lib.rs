// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable external-source bridge.
//!
//! [`create_source`] turns one [`Request`] into a cold observable of its [`Response`]:
//! subscribing issues the request through a [`Transport`], unsubscribing aborts it if
//! it is still in flight, and a non-2xx status is delivered as an error.
//! [`HttpSource`] layers JSON helpers on top.
//!
//! The `http-reqwest` feature provides [`ReqwestTransport`]; tests use the scripted
//! transport from `rill-test-utils`.

#[macro_use]
mod logging;

pub mod bridge;
pub mod http_source;
pub mod request;
#[cfg(feature = "http-reqwest")]
pub mod reqwest_transport;
pub mod transport;

pub use bridge::{create_source, from_future};
pub use http_source::HttpSource;
pub use request::{Method, Request, Response};
#[cfg(feature = "http-reqwest")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{Transport, TransportRef};
