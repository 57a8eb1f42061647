// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::executor::block_on;
use futures::StreamExt;
use rill_core::{Hub, IntoStream, Observable, RillError, StreamItem};

#[test]
fn test_into_stream_yields_values_then_ends() -> anyhow::Result<()> {
    // Arrange
    let stream = Observable::of(vec![1, 2, 3]).into_stream();

    // Act
    let items: Vec<StreamItem<i32>> = block_on(stream.collect());

    // Assert
    let values: Vec<i32> = items.into_iter().filter_map(StreamItem::ok).collect();
    assert_eq!(values, vec![1, 2, 3]);

    Ok(())
}

#[test]
fn test_into_stream_yields_error_as_last_item() -> anyhow::Result<()> {
    // Arrange
    let source = Observable::new(|subscriber| {
        subscriber.next("partial");
        subscriber.error(RillError::status(500, "/api/courses"));
        rill_core::Teardown::empty()
    });

    // Act
    let items: Vec<StreamItem<&str>> = block_on(source.into_stream().collect());

    // Assert
    assert_eq!(items.len(), 2);
    assert!(items[0].is_value());
    assert!(items[1].is_error());

    Ok(())
}

#[test]
fn test_dropping_stream_disposes_subscription() -> anyhow::Result<()> {
    // Arrange
    let hub = Hub::<u32>::new();
    let stream = hub.observable().into_stream();
    assert_eq!(hub.observer_count(), 1);

    // Act
    drop(stream);

    // Assert
    assert_eq!(hub.observer_count(), 0);

    Ok(())
}
