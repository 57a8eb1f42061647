// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Hub, Observable};
use rill_stream::prelude::*;
use rill_test_utils::{assert_completed_with, emit_after, virtual_scheduler, TestObserver};
use std::time::Duration;

#[test]
fn test_concat_map_runs_inners_in_arrival_order() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let outer = Hub::<(&'static str, u64)>::new();
    let inner_scheduler = scheduler.clone();
    let concatenated = outer.observable().concat_map(move |(label, ms)| {
        emit_after(
            &inner_scheduler,
            Duration::from_millis(ms),
            vec![format!("{label}-1"), format!("{label}-2")],
        )
    });
    let (observer, _subscription) = TestObserver::attach(&concatenated);

    // Act
    outer.next(("slow", 50))?;
    outer.next(("fast", 5))?;
    outer.complete();

    // Assert
    clock.advance(Duration::from_millis(49));
    assert!(observer.is_empty());

    clock.advance(Duration::from_millis(1));
    assert_eq!(observer.values(), vec!["slow-1", "slow-2"]);

    clock.advance(Duration::from_millis(5));
    assert_completed_with(
        &observer,
        &[
            "slow-1".to_string(),
            "slow-2".to_string(),
            "fast-1".to_string(),
            "fast-2".to_string(),
        ],
    );

    Ok(())
}

#[test]
fn test_concat_map_with_synchronous_inners() -> anyhow::Result<()> {
    // Arrange
    let source = Observable::of(vec![1, 2, 3]);

    // Act
    let (observer, _subscription) =
        TestObserver::attach(&source.concat_map(|v| Observable::of(vec![v, v * 10])));

    // Assert
    assert_completed_with(&observer, &[1, 10, 2, 20, 3, 30]);

    Ok(())
}

#[test]
fn test_concat_combinator_subscribes_sequentially() -> anyhow::Result<()> {
    // Arrange
    let (clock, scheduler) = virtual_scheduler();
    let sources = vec![
        emit_after(&scheduler, Duration::from_millis(30), vec![1]),
        emit_after(&scheduler, Duration::from_millis(10), vec![2]),
    ];

    // Act
    let (observer, _subscription) = TestObserver::attach(&concat(sources));
    clock.advance(Duration::from_millis(35));

    // Assert
    assert_eq!(observer.values(), vec![1]);
    clock.advance(Duration::from_millis(5));
    assert_completed_with(&observer, &[1, 2]);

    Ok(())
}
