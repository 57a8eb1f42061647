// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::Hub;
use rill_runtime::SchedulerRef;
use rill_source::{HttpSource, Method, TransportRef};
use rill_store::{Lesson, SearchConfig, SearchPipeline};
use rill_test_utils::fixtures::{lesson_json, lessons_envelope, ok_json};
use rill_test_utils::{virtual_scheduler, MockTransport, TestObserver};
use std::rc::Rc;
use std::time::Duration;

const LESSONS: &str = "/api/lessons";

/// Answers every lesson search with one lesson describing the filter it was given.
fn echo_transport(scheduler: &SchedulerRef, latency: Duration) -> Rc<MockTransport> {
    let transport = Rc::new(MockTransport::new(scheduler.clone()).with_latency(latency));
    transport.handle(Method::Get, LESSONS, |request| {
        let filter = request.query_param("filter").unwrap_or_default();
        ok_json(lessons_envelope(vec![lesson_json(1, filter, 3, 1)]))
    });
    transport
}

fn pipeline(transport: &Rc<MockTransport>, scheduler: SchedulerRef) -> SearchPipeline {
    let http = HttpSource::new(transport.clone() as TransportRef, scheduler, "");
    SearchPipeline::new(http, SearchConfig::default())
}

fn searched_terms(observer: &TestObserver<Vec<Lesson>>) -> Vec<String> {
    observer
        .values()
        .into_iter()
        .map(|lessons| lessons[0].description.clone())
        .collect()
}

#[test]
fn test_initial_empty_term_loads_after_debounce() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let transport = echo_transport(&scheduler, Duration::ZERO);
    let keystrokes = Hub::<String>::new();
    let lessons = pipeline(&transport, scheduler).search(3, keystrokes.observable());

    // Act
    let (observer, _subscription) = TestObserver::attach(&lessons);
    clock.advance(Duration::from_millis(399));
    assert_eq!(transport.call_count(), 0);
    clock.advance(Duration::from_millis(1));

    // Assert
    assert_eq!(searched_terms(&observer), vec![String::new()]);
    let call = &transport.calls()[0];
    assert_eq!(call.query_param("courseId"), Some("3"));
    assert_eq!(call.query_param("pageSize"), Some("100"));

    Ok(())
}

#[test]
fn test_burst_of_keystrokes_searches_settled_term_once() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let transport = echo_transport(&scheduler, Duration::ZERO);
    let keystrokes = Hub::<String>::new();
    let lessons = pipeline(&transport, scheduler).search(3, keystrokes.observable());
    let (observer, _subscription) = TestObserver::attach(&lessons);
    clock.advance(Duration::from_millis(500));

    // Act
    for term in ["r", "rx", "rxj", "rxjs "] {
        keystrokes.next(term.to_string())?;
        clock.advance(Duration::from_millis(100));
    }
    clock.advance(Duration::from_millis(300));

    // Assert
    assert_eq!(searched_terms(&observer), vec![String::new(), "rxjs".to_string()]);
    assert_eq!(transport.call_count(), 2);

    Ok(())
}

#[test]
fn test_repeated_settled_term_is_not_searched_again() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let transport = echo_transport(&scheduler, Duration::ZERO);
    let keystrokes = Hub::<String>::new();
    let lessons = pipeline(&transport, scheduler).search(3, keystrokes.observable());
    let (observer, _subscription) = TestObserver::attach(&lessons);

    // Act
    keystrokes.next("ngrx".to_string())?;
    clock.advance(Duration::from_millis(500));
    keystrokes.next("  ngrx".to_string())?;
    clock.advance(Duration::from_millis(500));

    // Assert
    assert_eq!(searched_terms(&observer), vec!["ngrx".to_string()]);
    assert_eq!(transport.call_count(), 1);

    Ok(())
}

#[test]
fn test_newer_term_cancels_slow_request() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let transport = echo_transport(&scheduler, Duration::from_millis(600));
    let keystrokes = Hub::<String>::new();
    let lessons = pipeline(&transport, scheduler).search(3, keystrokes.observable());
    let (observer, _subscription) = TestObserver::attach(&lessons);
    clock.advance(Duration::from_millis(1000));

    // Act
    keystrokes.next("rx".to_string())?;
    clock.advance(Duration::from_millis(500));
    keystrokes.next("rxjs".to_string())?;
    clock.advance(Duration::from_millis(1000));

    // Assert
    assert_eq!(
        searched_terms(&observer),
        vec![String::new(), "rxjs".to_string()]
    );
    assert_eq!(transport.call_count(), 3);
    assert_eq!(transport.cancelled(), 1);

    Ok(())
}
