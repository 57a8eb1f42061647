// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Result, RillError};
use rill_source::Response;
use serde_json::{json, Map, Value};

pub fn course_json(id: u32, description: &str, category: &str, seq_no: u32) -> Value {
    json!({
        "id": id,
        "description": description,
        "longDescription": format!("{description}: the complete course"),
        "iconUrl": format!("https://courses.example.com/icons/{id}.png"),
        "courseListIcon": "https://courses.example.com/icons/list.png",
        "category": category,
        "lessonsCount": 10,
        "seqNo": seq_no,
    })
}

pub fn course_rxjs_in_practice() -> Value {
    course_json(1, "RxJs In Practice Course", "BEGINNER", 1)
}

pub fn course_ngrx_in_depth() -> Value {
    course_json(2, "NgRx In Depth", "ADVANCED", 2)
}

pub fn course_angular_core() -> Value {
    course_json(3, "Angular Core Deep Dive", "BEGINNER", 3)
}

pub fn course_reactive_patterns() -> Value {
    course_json(4, "Reactive Angular Architecture", "ADVANCED", 4)
}

pub fn all_courses() -> Vec<Value> {
    vec![
        course_rxjs_in_practice(),
        course_ngrx_in_depth(),
        course_angular_core(),
        course_reactive_patterns(),
    ]
}

/// `{ "payload": { "<id>": course, ... } }`
pub fn courses_envelope(courses: Vec<Value>) -> Value {
    let payload: Map<String, Value> = courses
        .into_iter()
        .map(|course| (course["id"].to_string(), course))
        .collect();
    json!({ "payload": payload })
}

pub fn lesson_json(id: u32, description: &str, course_id: u32, seq_no: u32) -> Value {
    json!({
        "id": id,
        "description": description,
        "duration": "4:17",
        "seqNo": seq_no,
        "courseId": course_id,
    })
}

/// `{ "payload": [lesson, ...] }`
pub fn lessons_envelope(lessons: Vec<Value>) -> Value {
    json!({ "payload": lessons })
}

pub fn ok_json(body: Value) -> Result<Response> {
    Ok(Response::ok(body))
}

pub fn status(code: u16) -> Result<Response> {
    Ok(Response::new(code, Value::Null))
}

pub fn connection_refused() -> Result<Response> {
    Err(RillError::transport("connection refused"))
}
