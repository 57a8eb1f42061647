// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::Hub;
use rill_runtime::{SchedulerRef, TokioScheduler};
use rill_stream_time::prelude::*;
use rill_test_utils::TestObserver;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_debounce_on_tokio_clock() -> anyhow::Result<()> {
    LocalSet::new()
        .run_until(async {
            // Arrange
            let scheduler: SchedulerRef = Rc::new(TokioScheduler::new());
            let source = Hub::<&str>::new();
            let debounced = source.observable().debounce(Duration::from_millis(400), scheduler);
            let (observer, _subscription) = TestObserver::attach(&debounced);

            // Act
            source.next("r")?;
            advance(Duration::from_millis(100)).await;
            source.next("rx")?;
            advance(Duration::from_millis(300)).await;
            tokio::task::yield_now().await;

            // Assert
            assert!(observer.is_empty());
            advance(Duration::from_millis(110)).await;
            tokio::task::yield_now().await;
            assert_eq!(observer.values(), vec!["rx"]);

            Ok::<(), anyhow::Error>(())
        })
        .await
}
