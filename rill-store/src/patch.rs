// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::model::Record;
use rill_core::{Result, RillError};
use serde_json::Value;

/// Overwrites the top-level fields of `record` named in `patch`.
///
/// `patch` must be a JSON object, and the patched record must still decode and keep
/// its id.
pub(crate) fn merge_patch<R: Record>(record: &R, patch: &Value) -> Result<R> {
    let Value::Object(changes) = patch else {
        return Err(RillError::projection("patch must be a JSON object"));
    };

    let mut merged =
        serde_json::to_value(record).map_err(|error| RillError::projection(error.to_string()))?;
    if let Value::Object(fields) = &mut merged {
        for (name, value) in changes {
            fields.insert(name.clone(), value.clone());
        }
    }

    let patched: R =
        serde_json::from_value(merged).map_err(|error| RillError::projection(error.to_string()))?;
    if patched.id() != record.id() {
        return Err(RillError::projection(format!(
            "patch may not change the id of record {}",
            record.id()
        )));
    }
    Ok(patched)
}
