//! Anniversary generation from a single anchor date.
//!
//! Two families are produced, both as single-day entities:
//! - day milestones every 100 days, where the anchor itself is day 1
//! - yearly anniversaries on the anchor's month and day
//!
//! Nothing here is persisted. Ids are a pure function of kind, count and date,
//! so regenerating yields identical entities.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::entity::{AnniversaryKind, DateRangeEntity};

pub const MILESTONE_STEP: u32 = 100;
/// Upper bound on milestone days, whatever the anchor.
pub const MAX_MILESTONE_DAYS: u32 = 10_000;
pub const MAX_YEARS: u32 = 50;
/// The horizon is this many years after the current one.
pub const HORIZON_YEARS_AHEAD: i32 = 2;

/// Last calendar year for which entities are generated.
pub fn horizon_year(today: NaiveDate) -> i32 {
    today.year() + HORIZON_YEARS_AHEAD
}

/// Generate every milestone and yearly anniversary up to `horizon_year`,
/// ordered by date. A missing anchor yields nothing.
pub fn generate(anchor: Option<NaiveDate>, horizon_year: i32) -> Vec<DateRangeEntity> {
    let Some(anchor) = anchor else {
        return Vec::new();
    };

    let mut entities = day_milestones(anchor, horizon_year);
    entities.extend(yearly_anniversaries(anchor, horizon_year));
    entities.sort_by_key(|e| e.start_date());
    entities
}

/// "100일", "200일", ... with day 1 being the anchor.
pub fn day_milestones(anchor: NaiveDate, horizon_year: i32) -> Vec<DateRangeEntity> {
    let mut milestones = Vec::new();

    for count in (MILESTONE_STEP..=MAX_MILESTONE_DAYS).step_by(MILESTONE_STEP as usize) {
        let Some(date) = anchor.checked_add_days(Days::new(u64::from(count - 1))) else {
            break;
        };
        if date.year() > horizon_year {
            break;
        }
        milestones.push(DateRangeEntity::anniversary(
            AnniversaryKind::Days,
            count,
            format!("{}일", count),
            date,
        ));
    }

    milestones
}

/// "1주년", "2주년", ... on the anchor's month and day.
pub fn yearly_anniversaries(anchor: NaiveDate, horizon_year: i32) -> Vec<DateRangeEntity> {
    let mut anniversaries = Vec::new();

    for years in 1..=MAX_YEARS {
        let year = anchor.year() + years as i32;
        if year > horizon_year {
            break;
        }
        let Some(date) = same_day_in_year(anchor, year) else {
            continue;
        };
        anniversaries.push(DateRangeEntity::anniversary(
            AnniversaryKind::Years,
            years,
            format!("{}주년", years),
            date,
        ));
    }

    anniversaries
}

/// The anchor's month/day in `year`. Feb 29 falls back to Feb 28 in common years.
fn same_day_in_year(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    anchor
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day() - 1))
}

/// Memo table for generated anniversaries, keyed by anchor and horizon.
///
/// Owned by whoever composes the timeline. Call `invalidate` when the anchor
/// changes; a different anchor or horizon also misses on its own.
#[derive(Debug, Default)]
pub struct AnniversaryCache {
    key: Option<(NaiveDate, i32)>,
    entities: Vec<DateRangeEntity>,
}

impl AnniversaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate(
        &mut self,
        anchor: Option<NaiveDate>,
        horizon_year: i32,
    ) -> &[DateRangeEntity] {
        let Some(anchor) = anchor else {
            self.invalidate();
            return &self.entities;
        };

        let key = (anchor, horizon_year);
        if self.key == Some(key) {
            debug!(%anchor, horizon_year, "anniversary cache hit");
        } else {
            self.entities = generate(Some(anchor), horizon_year);
            self.key = Some(key);
            debug!(
                %anchor,
                horizon_year,
                count = self.entities.len(),
                "anniversary cache miss, regenerated"
            );
        }

        &self.entities
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.entities.clear();
    }

    /// Anchor the cached entities were generated for, if any.
    pub fn cached_anchor(&self) -> Option<NaiveDate> {
        self.key.map(|(anchor, _)| anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_day_anchor_falls_back_to_feb_28() {
        let anchor = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let yearly = yearly_anniversaries(anchor, 2028);
        let dates: Vec<_> = yearly.iter().map(|e| e.start_date().to_string()).collect();
        assert_eq!(
            dates,
            vec!["2025-02-28", "2026-02-28", "2027-02-28", "2028-02-29"]
        );
    }

    #[test]
    fn far_future_anchor_terminates_with_nothing_before_it() {
        let anchor = NaiveDate::from_ymd_opt(2200, 1, 1).unwrap();
        assert!(generate(Some(anchor), 2026).is_empty());
    }

    #[test]
    fn milestones_stop_at_iteration_bound() {
        let anchor = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let milestones = day_milestones(anchor, 2100);
        assert_eq!(milestones.len(), (MAX_MILESTONE_DAYS / MILESTONE_STEP) as usize);
        assert_eq!(milestones.last().unwrap().title, "10000일");
    }

    #[test]
    fn cache_regenerates_only_when_key_changes() {
        let mut cache = AnniversaryCache::new();
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let first = cache.get_or_generate(Some(anchor), 2026).to_vec();
        assert_eq!(cache.cached_anchor(), Some(anchor));
        let second = cache.get_or_generate(Some(anchor), 2026).to_vec();
        assert_eq!(first, second);

        let moved = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let third = cache.get_or_generate(Some(moved), 2026).to_vec();
        assert_ne!(first, third);
        assert_eq!(cache.cached_anchor(), Some(moved));

        cache.invalidate();
        assert_eq!(cache.cached_anchor(), None);
        assert!(cache.get_or_generate(None, 2026).is_empty());
    }
}
