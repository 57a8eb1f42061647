// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::model::Record;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

/// `{ "payload": { "<id>": record, ... } }`
#[derive(Debug, Deserialize)]
#[serde(bound = "R: DeserializeOwned")]
pub(crate) struct CollectionEnvelope<R> {
    payload: BTreeMap<String, R>,
}

impl<R: Record> CollectionEnvelope<R> {
    /// The records, ordered by id.
    pub(crate) fn into_records(self) -> Vec<R> {
        let mut records: Vec<R> = self.payload.into_values().collect();
        records.sort_by_key(Record::id);
        records
    }
}

/// `{ "payload": [item, ...] }`
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub(crate) struct ListEnvelope<T> {
    pub(crate) payload: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;
    use serde_json::json;

    #[test]
    fn test_records_are_ordered_by_numeric_id() {
        let envelope: CollectionEnvelope<Course> = serde_json::from_value(json!({
            "payload": {
                "10": { "id": 10, "description": "ten", "category": "BEGINNER" },
                "2": { "id": 2, "description": "two", "category": "ADVANCED" },
            }
        }))
        .unwrap();

        let ids: Vec<u32> = envelope.into_records().iter().map(|course| course.id).collect();

        assert_eq!(ids, vec![2, 10]);
    }
}
