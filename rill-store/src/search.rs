// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::SearchConfig;
use crate::envelope::ListEnvelope;
use crate::model::Lesson;
use rill_core::Observable;
use rill_source::HttpSource;
use rill_stream::prelude::*;
use rill_stream_time::DebounceExt;

/// Turns raw search-box input into lesson lists.
///
/// ```text
/// input -> map(trim) -> start_with("") -> debounce(config.debounce)
///       -> distinct_until_changed -> switch_map(load_lessons)
/// ```
///
/// The initial empty term loads the unfiltered list. A term is only searched once
/// input has been quiet for the debounce window, a repeated term is not searched
/// again, and a newer term cancels the request of the previous one.
#[derive(Clone)]
pub struct SearchPipeline {
    http: HttpSource,
    config: SearchConfig,
}

impl SearchPipeline {
    pub fn new(http: HttpSource, config: SearchConfig) -> Self {
        Self { http, config }
    }

    /// `GET {lessons_path}?courseId=..&pageSize=..&filter=..`
    pub fn load_lessons(&self, course_id: u32, filter: &str) -> Observable<Vec<Lesson>> {
        self.http
            .get_json::<ListEnvelope<Lesson>>(
                &self.config.lessons_path,
                &[
                    ("courseId", course_id.to_string()),
                    ("pageSize", self.config.page_size.to_string()),
                    ("filter", filter.to_string()),
                ],
            )
            .map(|envelope| envelope.payload)
    }

    pub fn search(&self, course_id: u32, input: Observable<String>) -> Observable<Vec<Lesson>> {
        let pipeline = self.clone();
        input
            .map(|raw| raw.trim().to_string())
            .start_with(String::new())
            .debounce(self.config.debounce(), self.http.scheduler().clone())
            .distinct_until_changed()
            .tap(|term| debug!("searching lessons matching {:?}", term))
            .switch_map(move |term| pipeline.load_lessons(course_id, &term))
    }
}
