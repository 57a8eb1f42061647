// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::StoreConfig;
use crate::detached::run_detached;
use crate::envelope::CollectionEnvelope;
use crate::model::{Category, Record};
use crate::patch::merge_patch;
use crate::state::{FetchState, WriteResult};
use rill_core::{Hub, Observable, RillError, SerialSubscription, StatefulHub};
use rill_runtime::SchedulerRef;
use rill_source::{HttpSource, TransportRef};
use rill_stream::prelude::*;
use rill_stream_time::RetryWithDelayExt;
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

/// A cached collection of records shared by any number of views.
///
/// The store owns one [`StatefulHub`] holding the collection, seeded empty. It is
/// written by exactly two paths: the fetch pipeline started by [`init`](Store::init),
/// and optimistic updates issued through [`apply_local_update`](Store::apply_local_update).
/// Views are derived from the hub and hold no state of their own, so however many
/// views are attached, the collection is fetched once.
///
/// # Fetch pipeline
///
/// ```text
/// defer(state = Fetching)
///   -> GET {collection_path}            one request per attempt
///   -> map(payload -> records by id)
///   -> tap(log)
///   -> catch_error(log, report, state = Failed, rethrow)
///   -> finalize(log)
///   -> retry_with_delay(config.retry)
///   => hub.next(records), state = Populated
/// ```
///
/// Failed attempts never reach the views. They are visible only through
/// [`errors`](Store::errors) and [`state`](Store::state).
///
/// # Example
///
/// ```no_run
/// use rill_runtime::{SchedulerRef, TokioScheduler};
/// use rill_source::TransportRef;
/// use rill_store::{Course, Store, StoreConfig};
/// use std::rc::Rc;
///
/// fn views(transport: TransportRef) {
///     let scheduler: SchedulerRef = Rc::new(TokioScheduler::new());
///     let store = Store::<Course>::new(
///         StoreConfig::default().with_base_url("http://localhost:9000"),
///         transport,
///         scheduler,
///     );
///     store.init();
///
///     let _beginner = store
///         .select_beginner_courses()
///         .subscribe_next(|courses| println!("{} beginner courses", courses.len()));
/// }
/// ```
pub struct Store<R: Record> {
    inner: Rc<Inner<R>>,
}

struct Inner<R> {
    config: StoreConfig,
    http: HttpSource,
    records: StatefulHub<Vec<R>>,
    errors: Hub<RillError>,
    state: Rc<Cell<FetchState>>,
    connection: SerialSubscription,
    started: Cell<bool>,
}

impl<R: Record> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Record> Store<R> {
    pub fn new(config: StoreConfig, transport: TransportRef, scheduler: SchedulerRef) -> Self {
        info!("store created for {}{}", config.base_url, config.collection_path);
        let http = HttpSource::new(transport, scheduler, config.base_url.clone());
        Self {
            inner: Rc::new(Inner {
                config,
                http,
                records: StatefulHub::new(Vec::new()),
                errors: Hub::new(),
                state: Rc::new(Cell::new(FetchState::Idle)),
                connection: SerialSubscription::new(),
                started: Cell::new(false),
            }),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Starts fetching the collection. Later calls are no-ops.
    pub fn init(&self) {
        if self.inner.started.replace(true) {
            debug!("store already initialised");
            return;
        }

        let records = self.inner.records.clone();
        let state = Rc::clone(&self.inner.state);
        let subscription = self.fetch().subscribe_with(
            move |collection: Vec<R>| {
                state.set(FetchState::Populated);
                if records.next(collection).is_err() {
                    debug!("store already shut down, collection dropped");
                }
            },
            |error| warn!("store stopped fetching: {}", error),
            || debug!("store fetch completed"),
        );
        self.inner.connection.set(subscription);
    }

    /// Stops fetching and retrying, and completes every view and the error stream.
    pub fn shutdown(&self) {
        info!("store shutting down");
        self.inner.connection.unsubscribe();
        self.inner.records.complete();
        self.inner.errors.complete();
    }

    fn fetch(&self) -> Observable<Vec<R>> {
        let inner = &self.inner;
        let (http, path) = (inner.http.clone(), inner.config.collection_path.clone());
        let fetching = Rc::clone(&inner.state);
        let failed = Rc::clone(&inner.state);
        let errors = inner.errors.clone();

        Observable::defer(move || {
            fetching.set(FetchState::Fetching);
            http.get_json::<CollectionEnvelope<R>>(&path, &[])
        })
        .map(CollectionEnvelope::into_records)
        .tap(|records| info!("request executed, {} records received", records.len()))
        .catch_error(move |error| {
            warn!("error occurred while fetching: {}", error);
            failed.set(FetchState::Failed);
            let _ = errors.next(error.clone());
            Observable::throw_error(error)
        })
        .finalize(|| debug!("fetch attempt finalized"))
        .retry_with_delay(inner.config.retry.clone(), inner.http.scheduler().clone())
    }

    /// The cached collection, optionally restricted to one category.
    ///
    /// A new attachment first receives the current collection (empty until the first
    /// fetch succeeds), then every update.
    pub fn stream(&self, category: Option<Category>) -> Observable<Vec<R>> {
        let all = self.inner.records.observable();
        match category {
            None => all,
            Some(category) => all.map(move |records| {
                records
                    .into_iter()
                    .filter(|record| record.category() == category)
                    .collect()
            }),
        }
    }

    pub fn filter_by_category(&self, category: Category) -> Observable<Vec<R>> {
        self.stream(Some(category))
    }

    pub fn select_beginner_courses(&self) -> Observable<Vec<R>> {
        self.filter_by_category(Category::Beginner)
    }

    pub fn select_advanced_courses(&self) -> Observable<Vec<R>> {
        self.filter_by_category(Category::Advanced)
    }

    /// The latest cached collection.
    pub fn snapshot(&self) -> Vec<R> {
        self.inner.records.value().unwrap_or_default()
    }

    pub fn state(&self) -> FetchState {
        self.inner.state.get()
    }

    /// Every error of every failed fetch attempt, including the ones that are retried.
    pub fn errors(&self) -> Observable<RillError> {
        self.inner.errors.observable()
    }

    /// Merges `patch` into the cached record `id`, then persists it.
    ///
    /// The cache is updated synchronously, before the write request is sent, and views
    /// see the new collection immediately. The `PUT {collection_path}/{id}` carrying
    /// `patch` is issued right away whether or not the returned observable is
    /// subscribed; subscribing only observes its outcome, and a failed write does not
    /// roll the cache back.
    ///
    /// # Errors
    ///
    /// The returned observable errors with [`RillError::RecordNotFound`] when `id` is
    /// not cached, and with [`RillError::Projection`] when `patch` cannot be applied.
    /// In both cases the cache is untouched and no request is sent.
    pub fn apply_local_update(&self, id: &R::Id, patch: Value) -> Observable<WriteResult> {
        let mut records = self.snapshot();
        let Some(position) = records.iter().position(|record| record.id() == *id) else {
            warn!("no cached record with id {}", id);
            return Observable::throw_error(RillError::record_not_found(id));
        };

        match merge_patch(&records[position], &patch) {
            Ok(patched) => records[position] = patched,
            Err(error) => return Observable::throw_error(error),
        }
        if let Err(closed) = self.inner.records.next(records) {
            warn!("local update of {} not applied: {}", id, closed);
        }

        run_detached(&self.save(id, patch))
    }

    /// A cold `PUT {collection_path}/{id}` of `changes`; the cache is not touched.
    pub fn save(&self, id: &R::Id, changes: Value) -> Observable<WriteResult> {
        let id = id.to_string();
        let path = format!("{}/{}", self.inner.config.collection_path, id);
        self.inner.http.put_json(&path, changes).map(move |response| WriteResult {
            id: id.clone(),
            status: response.status,
        })
    }

    /// A cold `GET {collection_path}/{id}` decoded as one record.
    pub fn load_record(&self, id: &R::Id) -> Observable<R> {
        let path = format!("{}/{}", self.inner.config.collection_path, id);
        self.inner.http.get_json(&path, &[])
    }
}
