// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Hub, Notification, Observable, RillError, Teardown};
use rill_stream::prelude::*;
use rill_test_utils::{assert_completed_with, TestObserver};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_map_transforms_each_value() -> anyhow::Result<()> {
    // Arrange
    let source = Observable::of(vec![1, 2, 3]);

    // Act
    let (observer, _subscription) = TestObserver::attach(&source.map(|v| v * 2));

    // Assert
    assert_completed_with(&observer, &[2, 4, 6]);

    Ok(())
}

#[test]
fn test_map_propagates_error_untouched() -> anyhow::Result<()> {
    // Arrange
    let hub = Hub::<i32>::new();

    // Act
    let (observer, _subscription) = TestObserver::attach(&hub.observable().map(|v| v + 1));
    hub.next(1)?;
    hub.error(RillError::stream_error("boom"))?;

    // Assert
    assert_eq!(observer.values(), vec![2]);
    assert!(matches!(
        observer.errors().as_slice(),
        [RillError::StreamProcessingError { .. }]
    ));

    Ok(())
}

#[test]
fn test_try_map_failure_errors_and_unsubscribes_upstream() -> anyhow::Result<()> {
    // Arrange
    let hub = Hub::<i32>::new();
    let torn_down = Rc::new(Cell::new(false));
    let flag = torn_down.clone();
    let source_hub = hub.clone();
    let source = Observable::new(move |subscriber| {
        let membership = source_hub.observable().subscribe(subscriber);
        let flag = flag.clone();
        Teardown::new(move || {
            membership.unsubscribe();
            flag.set(true);
        })
    });
    let mapped = source.try_map(|v: i32| {
        if v < 0 {
            Err(RillError::callback(format!("negative: {v}")))
        } else {
            Ok(v * 10)
        }
    });

    // Act
    let (observer, _subscription) = TestObserver::attach(&mapped);
    hub.next(1)?;
    hub.next(-1)?;
    hub.next(2)?;

    // Assert
    assert_eq!(observer.values(), vec![10]);
    assert!(matches!(
        observer.errors().as_slice(),
        [RillError::CallbackError { .. }]
    ));
    assert!(torn_down.get());
    assert_eq!(hub.observer_count(), 0);

    Ok(())
}

#[test]
fn test_map_is_lazy() -> anyhow::Result<()> {
    // Arrange
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();

    // Act
    let mapped = Observable::of(vec![1, 2]).map(move |v| {
        counter.set(counter.get() + 1);
        v
    });

    // Assert
    assert_eq!(calls.get(), 0);
    let (observer, _subscription) = TestObserver::attach(&mapped);
    assert_eq!(calls.get(), 2);
    assert_eq!(observer.events(), vec![
        Notification::Next(1),
        Notification::Next(2),
        Notification::Complete
    ]);

    Ok(())
}
