//! Validated calendar date spans.
//!
//! Dates travel as fixed-width `YYYY-MM-DD` strings at the boundary and as
//! `NaiveDate` everywhere else, so ordering never depends on string layout.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{OurdayError, OurdayResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse YYYY-MM-DD into a date.
pub fn parse_date(s: &str) -> OurdayResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| OurdayError::InvalidDate(s.to_string()))
}

/// Format a date as YYYY-MM-DD.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// An inclusive range of whole days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct DateSpan {
    #[serde(rename = "start_date")]
    start: NaiveDate,
    #[serde(rename = "end_date")]
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawSpan {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawSpan> for DateSpan {
    type Error = OurdayError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        DateSpan::new(raw.start_date, raw.end_date)
    }
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> OurdayResult<Self> {
        if end < start {
            return Err(OurdayError::InvalidRange { start, end });
        }
        Ok(DateSpan { start, end })
    }

    /// The span between two dates, whichever order they come in.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        DateSpan {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        DateSpan {
            start: date,
            end: date,
        }
    }

    /// Parse a span from two YYYY-MM-DD strings.
    pub fn parse(start: &str, end: &str) -> OurdayResult<Self> {
        DateSpan::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn intersects(&self, other: &DateSpan) -> bool {
        self.end >= other.start && self.start <= other.end
    }

    /// The part of this span inside `window`, if any.
    pub fn clip_to(&self, window: &DateSpan) -> Option<DateSpan> {
        if !self.intersects(window) {
            return None;
        }
        Some(DateSpan {
            start: self.start.max(window.start),
            end: self.end.min(window.end),
        })
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", format_date(self.start))
        } else {
            write!(f, "{}..{}", format_date(self.start), format_date(self.end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn rejects_reversed_span() {
        let err = DateSpan::parse("2024-03-05", "2024-03-01").unwrap_err();
        assert_eq!(
            err,
            OurdayError::InvalidRange {
                start: d("2024-03-05"),
                end: d("2024-03-01"),
            }
        );
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(matches!(
            parse_date("2024-3-5x"),
            Err(OurdayError::InvalidDate(_))
        ));
    }

    #[test]
    fn deserialize_enforces_ordering() {
        let ok: DateSpan =
            serde_json::from_str(r#"{"start_date":"2024-03-01","end_date":"2024-03-02"}"#)
                .unwrap();
        assert_eq!(ok.days(), 2);

        let bad = serde_json::from_str::<DateSpan>(
            r#"{"start_date":"2024-03-02","end_date":"2024-03-01"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn clip_keeps_only_overlap() {
        let span = DateSpan::parse("2024-03-01", "2024-03-05").unwrap();
        let week = DateSpan::parse("2024-03-03", "2024-03-09").unwrap();
        let clipped = span.clip_to(&week).unwrap();
        assert_eq!(clipped.start(), d("2024-03-03"));
        assert_eq!(clipped.end(), d("2024-03-05"));

        let later = DateSpan::parse("2024-03-10", "2024-03-12").unwrap();
        assert_eq!(later.clip_to(&week), None);
    }
}
