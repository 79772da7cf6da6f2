pub mod add;
pub mod anniversaries;
pub mod delete;
pub mod edit;
pub mod holidays;
pub mod month;
pub mod timeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ourday_core::{
    DateRangeEntity, DateSpan, HolidayCache, ScheduleStore, TimelineComposer, TimelineInput,
    UserId,
};
use tracing::debug;

use crate::config::OurdayConfig;
use crate::files::{self, JsonScheduleStore};

/// Everything a command needs: config, on-disk state and today's date.
pub struct Session {
    pub config: OurdayConfig,
    pub store: JsonScheduleStore,
    pub holidays: HolidayCache,
    pub today: NaiveDate,
    data_dir: PathBuf,
    viewer_override: Option<String>,
}

impl Session {
    pub fn open(viewer_override: Option<&str>) -> Result<Self> {
        let config = OurdayConfig::load()?;
        let data_dir = config.data_path();

        let store = JsonScheduleStore::open(&data_dir).context("Could not load schedules")?;
        let holidays =
            files::load_holiday_cache(&data_dir).context("Could not load holiday cache")?;
        debug!(
            data_dir = %data_dir.display(),
            holidays = holidays.entries().len(),
            "session opened"
        );

        Ok(Session {
            config,
            store,
            holidays,
            today: chrono::Local::now().date_naive(),
            data_dir,
            viewer_override: viewer_override.map(str::to_string),
        })
    }

    pub fn viewer(&self) -> Result<UserId> {
        self.config.viewer(self.viewer_override.as_deref())
    }

    /// The viewer's timeline, optionally limited to `window`.
    pub fn timeline(
        &self,
        viewer: &UserId,
        window: Option<&DateSpan>,
    ) -> Result<Vec<DateRangeEntity>> {
        let schedules = self.store.list(&self.config.couple_id)?;
        let input = TimelineInput {
            schedules: &schedules,
            viewer,
            holidays: &self.holidays,
            anniversary_date: self.config.anniversary_date,
            today: self.today,
        };

        let mut composer = TimelineComposer::new(self.config.compose_options());
        Ok(match window {
            Some(window) => composer.compose_window(&input, window),
            None => composer.compose(&input),
        })
    }

    pub fn save_holidays(&self) -> Result<()> {
        files::save_holiday_cache(&self.data_dir, &self.holidays)
            .context("Could not save holiday cache")
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        -1 => "Yesterday".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_labels_are_relative_near_today() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 25).unwrap();
        assert_eq!(format_date_label(today, today), "Today");
        assert_eq!(format_date_label(today.succ_opt().unwrap(), today), "Tomorrow");
        assert_eq!(
            format_date_label(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), today),
            "Sat Mar 1, 2025"
        );
    }
}
