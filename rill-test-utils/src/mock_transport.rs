// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scripted [`Transport`] for tests.
//!
//! Routes are matched on method and URL (query parameters excluded). A queued route
//! answers with its outcomes in order and keeps repeating the last one. Every request
//! waits `latency` on the scheduler before answering, which makes cancellation
//! observable: a request whose future is dropped before it settles counts as
//! cancelled.

use async_trait::async_trait;
use rill_core::{Result, RillError};
use rill_runtime::SchedulerRef;
use rill_source::{Method, Request, Response, Transport};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

type Handler = Box<dyn Fn(&Request) -> Result<Response>>;

enum Reply {
    Queue(VecDeque<Result<Response>>),
    Handler(Handler),
}

struct Route {
    method: Method,
    url: String,
    latency: Option<Duration>,
    reply: Reply,
}

pub struct MockTransport {
    scheduler: SchedulerRef,
    latency: Duration,
    routes: RefCell<Vec<Route>>,
    calls: RefCell<Vec<Request>>,
    settled: Cell<usize>,
    cancelled: Cell<usize>,
}

impl MockTransport {
    pub fn new(scheduler: SchedulerRef) -> Self {
        Self {
            scheduler,
            latency: Duration::ZERO,
            routes: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            settled: Cell::new(0),
            cancelled: Cell::new(0),
        }
    }

    /// Default delay before any response is delivered.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Appends an outcome to the queue of `method url`.
    pub fn enqueue(&self, method: Method, url: &str, outcome: Result<Response>) -> &Self {
        let mut routes = self.routes.borrow_mut();
        let queued = routes.iter().position(|route| {
            route.method == method && route.url == url && matches!(route.reply, Reply::Queue(_))
        });
        if let Some(index) = queued {
            if let Reply::Queue(queue) = &mut routes[index].reply {
                queue.push_back(outcome);
            }
        } else {
            routes.push(Route {
                method,
                url: url.to_string(),
                latency: None,
                reply: Reply::Queue(VecDeque::from([outcome])),
            });
        }
        drop(routes);
        self
    }

    /// Answers `method url` with `handler`, computed per request.
    pub fn handle<H>(&self, method: Method, url: &str, handler: H) -> &Self
    where
        H: Fn(&Request) -> Result<Response> + 'static,
    {
        self.routes.borrow_mut().push(Route {
            method,
            url: url.to_string(),
            latency: None,
            reply: Reply::Handler(Box::new(handler)),
        });
        self
    }

    /// Overrides the latency of every route declared for `method url`.
    pub fn route_latency(&self, method: Method, url: &str, latency: Duration) -> &Self {
        for route in self.routes.borrow_mut().iter_mut() {
            if route.method == method && route.url == url {
                route.latency = Some(latency);
            }
        }
        self
    }

    /// Every request received, in arrival order.
    pub fn calls(&self) -> Vec<Request> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls_to(&self, method: Method, url: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|request| request.method == method && request.url == url)
            .count()
    }

    /// Requests that produced an outcome.
    pub fn settled(&self) -> usize {
        self.settled.get()
    }

    /// Requests abandoned before producing an outcome.
    pub fn cancelled(&self) -> usize {
        self.cancelled.get()
    }

    fn latency_for(&self, request: &Request) -> Duration {
        self.routes
            .borrow()
            .iter()
            .find(|route| route.method == request.method && route.url == request.url)
            .and_then(|route| route.latency)
            .unwrap_or(self.latency)
    }

    fn reply_to(&self, request: &Request) -> Result<Response> {
        let mut routes = self.routes.borrow_mut();
        let route = routes
            .iter_mut()
            .find(|route| route.method == request.method && route.url == request.url)
            .ok_or_else(|| RillError::transport(format!("no route for {request}")))?;

        match &mut route.reply {
            Reply::Handler(handler) => handler(request),
            Reply::Queue(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(RillError::transport("empty queue"))),
            Reply::Queue(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(RillError::transport("empty queue"))),
        }
    }
}

struct InFlight<'a> {
    transport: &'a MockTransport,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.transport
                .cancelled
                .set(self.transport.cancelled.get() + 1);
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.calls.borrow_mut().push(request.clone());
        let mut in_flight = InFlight {
            transport: self,
            settled: false,
        };

        let latency = self.latency_for(&request);
        if !latency.is_zero() {
            self.scheduler.sleep(latency).await;
        }

        let outcome = self.reply_to(&request);
        in_flight.settled = true;
        self.settled.set(self.settled.get() + 1);
        outcome
    }
}
