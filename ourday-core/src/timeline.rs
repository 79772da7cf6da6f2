//! Merging authored, holiday and anniversary entities into one timeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::anniversary::{AnniversaryCache, horizon_year};
use crate::date_range::DateSpan;
use crate::entity::{AuthoredSchedule, DateRangeEntity, UserId};
use crate::holiday::HolidayCache;
use crate::perspective::all_to_viewer;

fn default_true() -> bool {
    true
}

/// Which generated sources contribute to the timeline.
/// Authored schedules are always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeOptions {
    #[serde(default = "default_true", alias = "showHolidays")]
    pub show_holidays: bool,
    #[serde(default = "default_true", alias = "showAnniversaries")]
    pub show_anniversaries: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        ComposeOptions {
            show_holidays: true,
            show_anniversaries: true,
        }
    }
}

/// Everything the composer reads. All of it is already in memory.
#[derive(Debug, Clone, Copy)]
pub struct TimelineInput<'a> {
    pub schedules: &'a [AuthoredSchedule],
    pub viewer: &'a UserId,
    pub holidays: &'a HolidayCache,
    pub anniversary_date: Option<NaiveDate>,
    pub today: NaiveDate,
}

/// Concatenate the sources and stable-sort by start date.
///
/// No source is assumed to be sorted. Entities with the same start date keep
/// their relative order: authored, then holidays, then anniversaries.
pub fn merge_sources(
    authored: Vec<DateRangeEntity>,
    holidays: Vec<DateRangeEntity>,
    anniversaries: Vec<DateRangeEntity>,
) -> Vec<DateRangeEntity> {
    let mut timeline = authored;
    timeline.extend(holidays);
    timeline.extend(anniversaries);
    timeline.sort_by_key(|e| e.start_date());
    timeline
}

/// Builds viewer-relative timelines and owns the anniversary memo table.
#[derive(Debug, Default)]
pub struct TimelineComposer {
    options: ComposeOptions,
    anniversaries: AnniversaryCache,
}

impl TimelineComposer {
    pub fn new(options: ComposeOptions) -> Self {
        TimelineComposer {
            options,
            anniversaries: AnniversaryCache::new(),
        }
    }

    pub fn options(&self) -> ComposeOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ComposeOptions) {
        self.options = options;
    }

    /// Drop memoized anniversaries. Call when the anchor date changes.
    pub fn invalidate_anniversaries(&mut self) {
        self.anniversaries.invalidate();
    }

    pub fn anniversary_cache(&self) -> &AnniversaryCache {
        &self.anniversaries
    }

    /// The full timeline, sorted by start date.
    pub fn compose(&mut self, input: &TimelineInput<'_>) -> Vec<DateRangeEntity> {
        if self.anniversaries.cached_anchor().is_some()
            && self.anniversaries.cached_anchor() != input.anniversary_date
        {
            debug!(anchor = ?input.anniversary_date, "anniversary anchor changed");
            self.invalidate_anniversaries();
        }

        let authored = all_to_viewer(input.schedules, input.viewer);

        let holidays = if self.options.show_holidays {
            input.holidays.entities()
        } else {
            Vec::new()
        };

        let anniversaries = if self.options.show_anniversaries {
            self.anniversaries
                .get_or_generate(input.anniversary_date, horizon_year(input.today))
                .to_vec()
        } else {
            Vec::new()
        };

        let timeline = merge_sources(authored, holidays, anniversaries);
        debug!(entities = timeline.len(), viewer = %input.viewer, "timeline composed");
        timeline
    }

    /// The timeline restricted to entities intersecting `window`.
    pub fn compose_window(
        &mut self,
        input: &TimelineInput<'_>,
        window: &DateSpan,
    ) -> Vec<DateRangeEntity> {
        self.compose(input)
            .into_iter()
            .filter(|e| e.span.intersects(window))
            .collect()
    }
}
