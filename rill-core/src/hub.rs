// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Multicast hubs.
//!
//! A [`Hub`] broadcasts each event synchronously to every observer attached at the
//! moment of the broadcast, in attachment order. A [`StatefulHub`] additionally keeps
//! the current value and replays it to every new attachment.
//!
//! ## Characteristics
//!
//! - **Hot**: observers of a plain [`Hub`] never see values emitted before they attached.
//! - **Replay**: a [`StatefulHub`] delivers its current value first, before any newer
//!   emission.
//! - **Terminal replay**: attaching after completion or error replays that terminal
//!   event instead of values.
//! - **Single-threaded**: cheap to clone; all clones share the same `Rc` state.
//!
//! ## Example
//!
//! ```
//! use rill_core::StatefulHub;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let hub = StatefulHub::new(Vec::<u32>::new());
//! hub.next(vec![1, 2]).unwrap();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let _subscription = hub.observable().subscribe_next(move |v| sink.borrow_mut().push(v));
//!
//! assert_eq!(*seen.borrow(), vec![vec![1, 2]]);
//! ```

use crate::error::RillError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subject_error::SubjectError;
use crate::subscriber::Subscriber;
use crate::subscription::Teardown;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone)]
enum Terminal {
    Completed,
    Errored(RillError),
}

struct HubState<T> {
    observers: Vec<(u64, Subscriber<T>)>,
    next_id: u64,
    terminal: Option<Terminal>,
}

impl<T> Default for HubState<T> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            terminal: None,
        }
    }
}

/// A hot hub that broadcasts events to all currently attached observers.
///
/// See the [module documentation](crate::hub) for details.
pub struct Hub<T> {
    state: Rc<RefCell<HubState<T>>>,
}

impl<T> Clone for Hub<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone + 'static> Default for Hub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Hub<T> {
    /// Creates an open hub with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HubState::default())),
        }
    }

    /// The observable side of the hub.
    ///
    /// Attaching after the hub terminated replays the terminal event.
    pub fn observable(&self) -> Observable<T> {
        let hub = self.clone();
        Observable::new(move |subscriber| hub.attach(subscriber))
    }

    /// Broadcasts a value.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the hub has terminated.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        let observers = self.snapshot()?;
        for subscriber in observers {
            subscriber.next(value.clone());
        }
        Ok(())
    }

    /// Broadcasts an error and terminates the hub.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the hub has already terminated.
    pub fn error(&self, error: RillError) -> Result<(), SubjectError> {
        for subscriber in self.terminate(Terminal::Errored(error.clone()))? {
            subscriber.error(error.clone());
        }
        Ok(())
    }

    /// Broadcasts completion and terminates the hub.
    ///
    /// Completing is idempotent.
    pub fn complete(&self) {
        if let Ok(observers) = self.terminate(Terminal::Completed) {
            for subscriber in observers {
                subscriber.complete();
            }
        }
    }

    /// Returns `true` once the hub has completed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.borrow().terminal.is_some()
    }

    /// Number of observers currently attached.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Registers `subscriber`, or replays the terminal event if the hub is closed.
    fn attach(&self, subscriber: Subscriber<T>) -> Teardown {
        let terminal = self.state.borrow().terminal.clone();
        match terminal {
            Some(Terminal::Completed) => {
                subscriber.complete();
                Teardown::empty()
            }
            Some(Terminal::Errored(error)) => {
                subscriber.error(error);
                Teardown::empty()
            }
            None => self.register(subscriber),
        }
    }

    fn register(&self, subscriber: Subscriber<T>) -> Teardown {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.observers.push((id, subscriber));
            id
        };

        let weak: Weak<RefCell<HubState<T>>> = Rc::downgrade(&self.state);
        Teardown::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().observers.retain(|(other, _)| *other != id);
            }
        })
    }

    fn snapshot(&self) -> Result<Vec<Subscriber<T>>, SubjectError> {
        let state = self.state.borrow();
        if state.terminal.is_some() {
            return Err(SubjectError::Closed);
        }
        Ok(state.observers.iter().map(|(_, s)| s.clone()).collect())
    }

    fn terminate(&self, terminal: Terminal) -> Result<Vec<Subscriber<T>>, SubjectError> {
        let mut state = self.state.borrow_mut();
        if state.terminal.is_some() {
            return Err(SubjectError::Closed);
        }
        state.terminal = Some(terminal);
        Ok(state.observers.drain(..).map(|(_, s)| s).collect())
    }
}

impl<T: Clone + 'static> Observer<T> for Hub<T> {
    fn on_next(&self, value: T) {
        if self.next(value).is_err() {
            trace!("hub already terminated, value dropped");
        }
    }

    fn on_error(&self, error: RillError) {
        if let Err(closed) = self.error(error) {
            trace!("hub already terminated, error dropped: {}", closed);
        }
    }

    fn on_complete(&self) {
        self.complete();
    }
}

/// A hub that owns a current value and replays it to new attachments.
///
/// The current value may be undefined (`None`) until the first emission when the hub
/// is created with [`StatefulHub::empty`].
pub struct StatefulHub<T> {
    hub: Hub<T>,
    value: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for StatefulHub<T> {
    fn clone(&self) -> Self {
        Self {
            hub: self.hub.clone(),
            value: Rc::clone(&self.value),
        }
    }
}

impl<T: Clone + 'static> StatefulHub<T> {
    /// Creates a hub seeded with `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            hub: Hub::new(),
            value: Rc::new(RefCell::new(Some(initial))),
        }
    }

    /// Creates a hub without a current value.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            hub: Hub::new(),
            value: Rc::new(RefCell::new(None)),
        }
    }

    /// The observable side of the hub.
    ///
    /// A new attachment first receives the current value (if any), then every newer
    /// emission. After termination it receives the terminal event only.
    pub fn observable(&self) -> Observable<T> {
        let this = self.clone();
        Observable::new(move |subscriber| {
            if this.hub.is_closed() {
                return this.hub.attach(subscriber);
            }
            let teardown = this.hub.register(subscriber.clone());
            let current = this.value.borrow().clone();
            if let Some(current) = current {
                subscriber.next(current);
            }
            teardown
        })
    }

    /// Replaces the current value and broadcasts it.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the hub has terminated.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        if self.hub.is_closed() {
            return Err(SubjectError::Closed);
        }
        *self.value.borrow_mut() = Some(value.clone());
        self.hub.next(value)
    }

    /// Derives a new value from the current one and broadcasts it.
    ///
    /// Returns `Ok(false)` without broadcasting if there is no current value or if
    /// `update` declines by returning `None`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the hub has terminated.
    pub fn update<F>(&self, update: F) -> Result<bool, SubjectError>
    where
        F: FnOnce(&T) -> Option<T>,
    {
        let current = self.value.borrow().clone();
        let next = current.as_ref().and_then(update);
        match next {
            Some(value) => self.next(value).map(|()| true),
            None => Ok(false),
        }
    }

    /// Broadcasts an error and terminates the hub.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the hub has already terminated.
    pub fn error(&self, error: RillError) -> Result<(), SubjectError> {
        self.hub.error(error)
    }

    /// Broadcasts completion and terminates the hub.
    pub fn complete(&self) {
        self.hub.complete();
    }

    /// The current value, if defined.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.value.borrow().clone()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.hub.is_closed()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.hub.observer_count()
    }
}

impl<T: Clone + 'static> Observer<T> for StatefulHub<T> {
    fn on_next(&self, value: T) {
        if self.next(value).is_err() {
            trace!("stateful hub already terminated, value dropped");
        }
    }

    fn on_error(&self, error: RillError) {
        if let Err(closed) = self.error(error) {
            trace!("stateful hub already terminated, error dropped: {}", closed);
        }
    }

    fn on_complete(&self) {
        self.complete();
    }
}
