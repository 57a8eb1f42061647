// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Notification, Observable, RillError, Teardown};
use rill_test_utils::{assert_completed_with, collect_sync, TestObserver};
use std::cell::Cell;
use std::rc::Rc;

fn counting_source(runs: Rc<Cell<u32>>) -> Observable<u32> {
    Observable::new(move |subscriber| {
        runs.set(runs.get() + 1);
        subscriber.next(runs.get());
        subscriber.complete();
        Teardown::empty()
    })
}

#[test]
fn test_each_subscription_runs_producer_independently() -> anyhow::Result<()> {
    // Arrange
    let runs = Rc::new(Cell::new(0));
    let source = counting_source(runs.clone());

    // Act
    let (first, _first) = TestObserver::attach(&source);
    let (second, _second) = TestObserver::attach(&source);

    // Assert
    assert_eq!(runs.get(), 2);
    assert_completed_with(&first, &[1]);
    assert_completed_with(&second, &[2]);

    Ok(())
}

#[test]
fn test_fallible_producer_routes_error_to_observer() -> anyhow::Result<()> {
    // Arrange
    let source = Observable::<u32>::try_new(|_| Err(RillError::stream_error("producer failed")));

    // Act
    let events = collect_sync(&source);

    // Assert
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Notification::Error(RillError::StreamProcessingError { .. })));

    Ok(())
}

#[test]
fn test_nothing_is_delivered_after_terminal_event() -> anyhow::Result<()> {
    // Arrange
    let source = Observable::new(|subscriber| {
        subscriber.next(1);
        subscriber.complete();
        subscriber.next(2);
        subscriber.error(RillError::stream_error("late"));
        Teardown::empty()
    });

    // Act
    let (observer, subscription) = TestObserver::attach(&source);

    // Assert
    assert_completed_with(&observer, &[1]);
    assert_eq!(observer.len(), 2);
    assert!(subscription.is_closed());

    Ok(())
}

#[test]
fn test_teardown_runs_once_on_completion_and_later_unsubscribe() -> anyhow::Result<()> {
    // Arrange
    let teardowns = Rc::new(Cell::new(0));
    let counter = teardowns.clone();
    let source = Observable::new(move |subscriber| {
        subscriber.next("only");
        let counter = counter.clone();
        subscriber.complete();
        Teardown::new(move || counter.set(counter.get() + 1))
    });

    // Act
    let (_observer, subscription) = TestObserver::attach(&source);
    subscription.unsubscribe();
    subscription.unsubscribe();

    // Assert
    assert_eq!(teardowns.get(), 1);

    Ok(())
}

#[test]
fn test_defer_builds_fresh_source_per_subscription() -> anyhow::Result<()> {
    // Arrange
    let built = Rc::new(Cell::new(0));
    let counter = built.clone();
    let source = Observable::defer(move || {
        counter.set(counter.get() + 1);
        Observable::just(counter.get())
    });
    assert_eq!(built.get(), 0);

    // Act
    let (first, _first) = TestObserver::attach(&source);
    let (second, _second) = TestObserver::attach(&source);

    // Assert
    assert_eq!(first.values(), vec![1]);
    assert_eq!(second.values(), vec![2]);

    Ok(())
}

#[test]
fn test_creation_helpers() -> anyhow::Result<()> {
    // Arrange
    let empty = Observable::<u8>::empty();
    let never = Observable::<u8>::never();
    let failing = Observable::<u8>::throw_error(RillError::transport("offline"));
    let ranged = Observable::from_iter(1..=3);

    // Act
    let (empty_observer, _e) = TestObserver::attach(&empty);
    let (never_observer, never_subscription) = TestObserver::attach(&never);
    let (failing_observer, _f) = TestObserver::attach(&failing);
    let (ranged_observer, _r) = TestObserver::attach(&ranged);

    // Assert
    assert_completed_with(&empty_observer, &[]);
    assert!(never_observer.is_empty());
    assert!(!never_subscription.is_closed());
    assert!(failing_observer.is_errored());
    assert_completed_with(&ranged_observer, &[1, 2, 3]);

    Ok(())
}

#[test]
fn test_subscribe_with_callbacks() -> anyhow::Result<()> {
    // Arrange
    let sum = Rc::new(Cell::new(0));
    let completed = Rc::new(Cell::new(false));
    let (sum_clone, completed_clone) = (sum.clone(), completed.clone());

    // Act
    let _subscription = Observable::of(vec![1, 2, 3]).subscribe_with(
        move |value| sum_clone.set(sum_clone.get() + value),
        |_| {},
        move || completed_clone.set(true),
    );

    // Assert
    assert_eq!(sum.get(), 6);
    assert!(completed.get());

    Ok(())
}
