//! The date-ranged records the engine works with.
//!
//! `AuthoredSchedule` is the row the CRUD collaborator stores, written from its
//! author's perspective. `DateRangeEntity` is what the engine hands to views:
//! authored rows re-labelled for the viewer, plus generated holidays and
//! anniversaries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{ANNIVERSARY_COLOR, Category, HOLIDAY_COLOR};
use crate::date_range::{DateSpan, format_date};

pub const HOLIDAY_LABEL: &str = "holiday";
pub const ANNIVERSARY_LABEL: &str = "anniversary";

/// Identity of one of the two participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::new(s)
    }
}

/// A stored schedule row. `category` is from the writer's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoredSchedule {
    pub id: String,
    pub couple_id: String,
    pub writer_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub span: DateSpan,
    pub category: Category,
    /// Color as last written by some client. Never used for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Which kind of anniversary a generated entity marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnniversaryKind {
    /// Every 100 days counted from the anchor (day 1).
    Days,
    /// Same month and day every year.
    Years,
}

impl AnniversaryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnniversaryKind::Days => "days",
            AnniversaryKind::Years => "years",
        }
    }
}

/// Where an entity came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum EntityKind {
    Authored { writer_id: UserId },
    Holiday,
    Anniversary { kind: AnniversaryKind, count: u32 },
}

/// A titled date range ready for composition and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub span: DateSpan,
    pub color: String,
    pub category: Category,
    pub kind: EntityKind,
}

impl DateRangeEntity {
    pub fn holiday(id: String, title: &str, date: NaiveDate) -> Self {
        DateRangeEntity {
            id,
            title: title.to_string(),
            description: HOLIDAY_LABEL.to_string(),
            span: DateSpan::single_day(date),
            color: HOLIDAY_COLOR.to_string(),
            category: Category::Shared,
            kind: EntityKind::Holiday,
        }
    }

    pub fn anniversary(kind: AnniversaryKind, count: u32, title: String, date: NaiveDate) -> Self {
        DateRangeEntity {
            id: format!("anniversary:{}:{}:{}", kind.as_str(), count, format_date(date)),
            title,
            description: ANNIVERSARY_LABEL.to_string(),
            span: DateSpan::single_day(date),
            color: ANNIVERSARY_COLOR.to_string(),
            category: Category::Shared,
            kind: EntityKind::Anniversary { kind, count },
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.span.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.span.end()
    }

    /// Only authored entities can be edited; generated ones are rebuilt on demand.
    pub fn editable(&self) -> bool {
        matches!(self.kind, EntityKind::Authored { .. })
    }

    pub fn writer_id(&self) -> Option<&UserId> {
        match &self.kind {
            EntityKind::Authored { writer_id } => Some(writer_id),
            _ => None,
        }
    }
}

impl fmt::Display for DateRangeEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
