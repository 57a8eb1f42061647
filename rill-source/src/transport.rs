// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::request::{Request, Response};
use async_trait::async_trait;
use rill_core::Result;
use std::rc::Rc;

/// Executes external operations.
///
/// Implementations return `Ok` for every response that reached the remote side,
/// whatever its status; `Err` is reserved for transport failures (DNS, refused
/// connections, malformed bodies). Dropping the returned future aborts the operation.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: Request) -> Result<Response>;
}

pub type TransportRef = Rc<dyn Transport>;
