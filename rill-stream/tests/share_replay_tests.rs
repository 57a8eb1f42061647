// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Hub, Observable, RillError, Teardown};
use rill_stream::prelude::*;
use rill_test_utils::{assert_completed_with, TestObserver};
use std::cell::Cell;
use std::rc::Rc;

fn counted(hub: &Hub<i32>) -> (Rc<Cell<u32>>, Observable<i32>) {
    let runs = Rc::new(Cell::new(0));
    let (counter, hub) = (runs.clone(), hub.clone());
    let source = Observable::new(move |subscriber| {
        counter.set(counter.get() + 1);
        Teardown::from(hub.observable().subscribe(subscriber))
    });
    (runs, source)
}

#[test]
fn test_share_replay_replays_recorded_values_to_late_observers() -> anyhow::Result<()> {
    // Arrange
    let hub = Hub::new();
    let (runs, source) = counted(&hub);
    let cached = source.share_replay();
    let (_first, _a) = TestObserver::attach(&cached);
    hub.next(1)?;
    hub.next(2)?;

    // Act
    let (late, _b) = TestObserver::attach(&cached);
    hub.next(3)?;

    // Assert
    assert_eq!(late.values(), vec![1, 2, 3]);
    assert_eq!(runs.get(), 1);

    Ok(())
}

#[test]
fn test_share_replay_after_completion_replays_without_resubscribing() -> anyhow::Result<()> {
    // Arrange
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();
    let cached = Observable::defer(move || {
        counter.set(counter.get() + 1);
        Observable::of(vec![vec![1, 2]])
    })
    .share_replay();

    // Act
    let (first, _a) = TestObserver::attach(&cached);
    let (second, _b) = TestObserver::attach(&cached);

    // Assert
    assert_completed_with(&first, &[vec![1, 2]]);
    assert_completed_with(&second, &[vec![1, 2]]);
    assert_eq!(runs.get(), 1);

    Ok(())
}

#[test]
fn test_share_replay_stays_connected_without_observers() -> anyhow::Result<()> {
    // Arrange
    let hub = Hub::new();
    let (runs, source) = counted(&hub);
    let cached = source.share_replay();
    let (_first, a) = TestObserver::attach(&cached);

    // Act
    a.unsubscribe();
    hub.next(9)?;
    let (late, _b) = TestObserver::attach(&cached);

    // Assert
    assert_eq!(hub.observer_count(), 1);
    assert_eq!(late.values(), vec![9]);
    assert_eq!(runs.get(), 1);

    Ok(())
}

#[test]
fn test_share_replay_ref_counted_reconnects_after_last_observer_leaves() -> anyhow::Result<()> {
    // Arrange
    let hub = Hub::new();
    let (runs, source) = counted(&hub);
    let cached = source.share_replay_ref_counted();
    let (_first, a) = TestObserver::attach(&cached);
    hub.next(1)?;

    // Act
    a.unsubscribe();
    assert_eq!(hub.observer_count(), 0);
    let (late, _b) = TestObserver::attach(&cached);
    hub.next(2)?;

    // Assert
    assert_eq!(runs.get(), 2);
    assert_eq!(late.values(), vec![2]);

    Ok(())
}

#[test]
fn test_share_replay_error_resets_for_next_observer() -> anyhow::Result<()> {
    // Arrange
    let attempts = Rc::new(Cell::new(0));
    let counter = attempts.clone();
    let cached = Observable::defer(move || {
        counter.set(counter.get() + 1);
        if counter.get() == 1 {
            Observable::throw_error(RillError::transport("offline"))
        } else {
            Observable::just(42)
        }
    })
    .share_replay();

    // Act
    let (first, _a) = TestObserver::attach(&cached);
    let (second, _b) = TestObserver::attach(&cached);

    // Assert
    assert!(first.is_errored());
    assert_completed_with(&second, &[42]);
    assert_eq!(attempts.get(), 2);

    Ok(())
}
