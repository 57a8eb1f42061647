// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Hub, Observable};
use rill_stream::prelude::*;
use rill_test_utils::{assert_completed_with, TestObserver};

#[test]
fn test_start_with_emits_seed_before_source() -> anyhow::Result<()> {
    // Arrange
    let source = Observable::of(vec![2, 3]);

    // Act
    let (observer, _subscription) = TestObserver::attach(&source.start_with(1));

    // Assert
    assert_completed_with(&observer, &[1, 2, 3]);

    Ok(())
}

#[test]
fn test_start_with_seed_is_synchronous() -> anyhow::Result<()> {
    // Arrange
    let hub = Hub::<String>::new();

    // Act
    let (observer, _subscription) =
        TestObserver::attach(&hub.observable().start_with(String::new()));

    // Assert
    assert_eq!(observer.values(), vec![String::new()]);
    assert_eq!(hub.observer_count(), 1);

    hub.next("rx".to_string())?;
    assert_eq!(observer.values(), vec![String::new(), "rx".to_string()]);

    Ok(())
}
