// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RillError;
use crate::observer::Observer;

/// One event of an observable sequence, reified as a value.
///
/// Stages that have to hold events for later (`delay`) and test observers that
/// record what they saw store them as `Notification`s.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    /// A value
    Next(T),
    /// The terminal error
    Error(RillError),
    /// Successful termination
    Complete,
}

impl<T> Notification<T> {
    /// Returns `true` for `Error` and `Complete`.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Next(_))
    }

    /// Returns the value of a `Next` notification.
    pub fn value(&self) -> Option<&T> {
        match self {
            Notification::Next(value) => Some(value),
            _ => None,
        }
    }

    /// Delivers this notification to `observer`.
    pub fn accept<O>(self, observer: &O)
    where
        O: Observer<T> + ?Sized,
    {
        match self {
            Notification::Next(value) => observer.on_next(value),
            Notification::Error(error) => observer.on_error(error),
            Notification::Complete => observer.on_complete(),
        }
    }
}

impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notification::Next(a), Notification::Next(b)) => a == b,
            (Notification::Complete, Notification::Complete) => true,
            _ => false, // Errors are never equal
        }
    }
}
