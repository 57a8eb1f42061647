// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Hub, Observable, RillError};
use rill_stream::prelude::*;
use rill_test_utils::TestObserver;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = count.clone();
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn test_finalize_runs_once_on_completion() -> anyhow::Result<()> {
    // Arrange
    let (count, action) = counter();

    // Act
    let (observer, subscription) = TestObserver::attach(&Observable::of(vec![1]).finalize(action));
    subscription.unsubscribe();

    // Assert
    assert!(observer.is_completed());
    assert_eq!(count.get(), 1);

    Ok(())
}

#[test]
fn test_finalize_runs_once_on_error() -> anyhow::Result<()> {
    // Arrange
    let (count, action) = counter();
    let hub = Hub::<i32>::new();
    let (_observer, subscription) = TestObserver::attach(&hub.observable().finalize(action));

    // Act
    hub.error(RillError::transport("offline"))?;
    subscription.unsubscribe();

    // Assert
    assert_eq!(count.get(), 1);

    Ok(())
}

#[test]
fn test_finalize_runs_once_on_cancellation() -> anyhow::Result<()> {
    // Arrange
    let (count, action) = counter();
    let hub = Hub::<i32>::new();
    let (_observer, subscription) = TestObserver::attach(&hub.observable().finalize(action));
    assert_eq!(count.get(), 0);

    // Act
    subscription.unsubscribe();
    subscription.unsubscribe();
    hub.complete();

    // Assert
    assert_eq!(count.get(), 1);
    assert_eq!(hub.observer_count(), 0);

    Ok(())
}

#[test]
fn test_finalize_runs_after_terminal_delivery() -> anyhow::Result<()> {
    // Arrange
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let (on_complete, on_finalize) = (order.clone(), order.clone());

    // Act
    let _subscription = Observable::<i32>::empty()
        .finalize(move || on_finalize.borrow_mut().push("finalize"))
        .subscribe_with(|_| {}, |_| {}, move || on_complete.borrow_mut().push("complete"));

    // Assert
    assert_eq!(*order.borrow(), vec!["complete", "finalize"]);

    Ok(())
}
