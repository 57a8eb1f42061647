// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::RillError;
use rill_source::{from_future, HttpSource, Method, TransportRef};
use rill_test_utils::fixtures::{lesson_json, lessons_envelope, ok_json, status};
use rill_test_utils::{virtual_scheduler, MockTransport, TestObserver};
use serde::Deserialize;
use serde_json::json;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Envelope {
    payload: Vec<serde_json::Value>,
}

#[test]
fn test_get_json_decodes_body_and_passes_query() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let transport = Rc::new(MockTransport::new(scheduler.clone()));
    transport.enqueue(
        Method::Get,
        "http://localhost:9000/api/lessons",
        ok_json(lessons_envelope(vec![lesson_json(1, "Intro", 3, 1)])),
    );
    let http = HttpSource::new(transport.clone() as TransportRef, scheduler, "http://localhost:9000/");

    // Act
    let lessons = http.get_json::<Envelope>(
        "/api/lessons",
        &[("courseId", "3".to_string()), ("pageSize", "100".to_string())],
    );
    let (observer, _subscription) = TestObserver::attach(&lessons);
    clock.run_until_idle();

    // Assert
    assert_eq!(observer.values()[0].payload.len(), 1);
    assert!(observer.is_completed());
    let call = &transport.calls()[0];
    assert_eq!(call.query_param("courseId"), Some("3"));
    assert_eq!(call.query_param("pageSize"), Some("100"));

    Ok(())
}

#[test]
fn test_get_json_reports_malformed_payload_as_projection_error() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let transport = Rc::new(MockTransport::new(scheduler.clone()));
    transport.enqueue(Method::Get, "/api/lessons", ok_json(json!({"payload": 42})));
    let http = HttpSource::new(transport.clone() as TransportRef, scheduler, "");

    // Act
    let (observer, _subscription) = TestObserver::attach(&http.get_json::<Envelope>("/api/lessons", &[]));
    clock.run_until_idle();

    // Assert
    assert!(matches!(
        observer.errors().as_slice(),
        [RillError::Projection { .. }]
    ));

    Ok(())
}

#[test]
fn test_put_json_sends_body_and_fails_on_status() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let transport = Rc::new(MockTransport::new(scheduler.clone()));
    transport.enqueue(Method::Put, "/api/courses/1", status(500));
    let http = HttpSource::new(transport.clone() as TransportRef, scheduler, "");

    // Act
    let (observer, _subscription) =
        TestObserver::attach(&http.put_json("/api/courses/1", json!({"description": "New"})));
    clock.run_until_idle();

    // Assert
    assert_eq!(transport.calls()[0].body, Some(json!({"description": "New"})));
    assert!(matches!(
        observer.errors().as_slice(),
        [RillError::Status { status: 500, .. }]
    ));

    Ok(())
}

#[test]
fn test_from_future_runs_factory_per_subscription() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let runs = Rc::new(std::cell::Cell::new(0));
    let counter = runs.clone();
    let source = from_future(scheduler, move || {
        counter.set(counter.get() + 1);
        async { Ok::<_, RillError>(7) }
    });

    // Act
    let (first, _a) = TestObserver::attach(&source);
    let (second, _b) = TestObserver::attach(&source);
    clock.run_until_idle();

    // Assert
    assert_eq!(runs.get(), 2);
    assert_eq!(first.values(), vec![7]);
    assert_eq!(second.values(), vec![7]);

    Ok(())
}
