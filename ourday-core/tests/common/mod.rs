#![allow(dead_code)]

use chrono::NaiveDate;
use ourday_core::{AuthoredSchedule, Category, DateRangeEntity, DateSpan, UserId};

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn schedule(id: &str, writer: &str, start: &str, end: &str, category: Category) -> AuthoredSchedule {
    AuthoredSchedule {
        id: id.to_string(),
        couple_id: "couple-1".to_string(),
        writer_id: UserId::new(writer),
        title: id.to_string(),
        description: String::new(),
        span: DateSpan::new(d(start), d(end)).unwrap(),
        category,
        color: None,
    }
}

/// An authored entity as seen by its own writer.
pub fn entity(id: &str, start: &str, end: &str) -> DateRangeEntity {
    let writer = UserId::new("alice");
    ourday_core::perspective::to_viewer(
        &schedule(id, "alice", start, end, Category::Mine),
        &writer,
    )
}
