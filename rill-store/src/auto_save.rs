// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::model::Record;
use crate::state::WriteResult;
use crate::store::Store;
use rill_core::Observable;
use rill_stream::prelude::*;
use serde_json::Value;

/// Saves each valid change of record `id`, one write at a time.
///
/// Changes rejected by `is_valid` are skipped. A change arriving while a write is in
/// flight waits for it to finish, so writes reach the server in the order the
/// changes were made.
pub fn auto_save<R, V>(
    store: &Store<R>,
    id: R::Id,
    changes: Observable<Value>,
    is_valid: V,
) -> Observable<WriteResult>
where
    R: Record,
    V: Fn(&Value) -> bool + 'static,
{
    let store = store.clone();
    changes
        .filter(is_valid)
        .concat_map(move |patch| store.save(&id, patch))
}
