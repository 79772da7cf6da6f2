//! Public holidays as calendar entities.
//!
//! Holidays live in a local cache seeded from bundled data and refreshed from
//! an external source. Each cached entry becomes one single-day entity.

mod bundled;
mod cache;
mod source;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::format_date;
use crate::entity::DateRangeEntity;

pub use bundled::bundled_holidays;
pub use cache::{DEFAULT_REFRESH_COOLDOWN, HolidayCache, RefreshOutcome, RefreshSummary};
pub use source::HolidaySource;

/// One named holiday on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub title: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Holiday {
            date,
            title: title.into(),
        }
    }
}

/// Turn holidays into entities with ids of the form `holiday:<date>:<index>`.
///
/// `index` counts entries sharing the same date, in input order, so two
/// holidays on one day get distinct ids.
pub fn holiday_entities(holidays: &[Holiday]) -> Vec<DateRangeEntity> {
    let mut per_date: HashMap<NaiveDate, usize> = HashMap::new();

    holidays
        .iter()
        .map(|holiday| {
            let index = per_date.entry(holiday.date).or_insert(0);
            let id = format!("holiday:{}:{}", format_date(holiday.date), index);
            *index += 1;
            DateRangeEntity::holiday(id, &holiday.title, holiday.date)
        })
        .collect()
}
