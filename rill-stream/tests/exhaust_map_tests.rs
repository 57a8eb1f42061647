// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::Hub;
use rill_stream::prelude::*;
use rill_test_utils::{emit_after, virtual_scheduler, TestObserver};
use std::time::Duration;

#[test]
fn test_exhaust_map_ignores_values_while_busy() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let clicks = Hub::<u32>::new();
    let inner_scheduler = scheduler.clone();
    let saves = clicks
        .observable()
        .exhaust_map(move |n| emit_after(&inner_scheduler, Duration::from_millis(20), vec![n]));
    let (observer, _subscription) = TestObserver::attach(&saves);

    // Act
    clicks.next(1)?;
    clock.advance(Duration::from_millis(5));
    clicks.next(2)?;
    clock.advance(Duration::from_millis(15));
    clicks.next(3)?;
    clock.advance(Duration::from_millis(20));

    // Assert
    assert_eq!(observer.values(), vec![1, 3]);

    Ok(())
}

#[test]
fn test_exhaust_map_completes_once_active_inner_completes() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let clicks = Hub::<u32>::new();
    let inner_scheduler = scheduler.clone();
    let saves = clicks
        .observable()
        .exhaust_map(move |n| emit_after(&inner_scheduler, Duration::from_millis(20), vec![n]));
    let (observer, _subscription) = TestObserver::attach(&saves);

    // Act
    clicks.next(1)?;
    clicks.complete();
    assert!(!observer.is_completed());
    clock.advance(Duration::from_millis(20));

    // Assert
    assert_eq!(observer.values(), vec![1]);
    assert!(observer.is_completed());

    Ok(())
}
