//! Month grids split into 7-day week rows.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::date_range::DateSpan;
use crate::entity::DateRangeEntity;
use crate::error::{OurdayError, OurdayResult};

pub const DAYS_PER_WEEK: usize = 7;

/// First column of every week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// How many days `date` lies after the most recent week start.
    fn offset_of(self, date: NaiveDate) -> u32 {
        let first = self.weekday().num_days_from_sunday();
        (date.weekday().num_days_from_sunday() + 7 - first) % 7
    }
}

/// Seven consecutive days, one grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRow {
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekRow {
    /// The row whose first cell is `first`. `None` only at the edge of the date range.
    pub fn starting(first: NaiveDate) -> Option<Self> {
        let mut days = [first; DAYS_PER_WEEK];
        for (i, day) in days.iter_mut().enumerate() {
            *day = first.checked_add_days(Days::new(i as u64))?;
        }
        Some(WeekRow { days })
    }

    pub fn days(&self) -> &[NaiveDate; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn week_start(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn week_end(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    pub fn span(&self) -> DateSpan {
        DateSpan::between(self.week_start(), self.week_end())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.week_start() <= date && date <= self.week_end()
    }

    /// Column (0-6) of `date`, if it is in this row.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == date)
    }

    /// Every entity whose range touches this row. Input order is kept.
    pub fn select<'a>(&self, entities: &'a [DateRangeEntity]) -> Vec<&'a DateRangeEntity> {
        entities
            .iter()
            .filter(|e| e.end_date() >= self.week_start() && e.start_date() <= self.week_end())
            .collect()
    }
}

/// The rows needed to show one month, padded with days of the adjacent months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    week_start: WeekStart,
    rows: Vec<WeekRow>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32, week_start: WeekStart) -> OurdayResult<Self> {
        let invalid =
            || OurdayError::Validation(format!("Invalid month {:04}-{:02}", year, month));

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last = first
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;

        let grid_start = first
            .checked_sub_days(Days::new(u64::from(week_start.offset_of(first))))
            .ok_or_else(invalid)?;

        let mut rows = Vec::new();
        let mut row_start = grid_start;
        while row_start <= last {
            let row = WeekRow::starting(row_start).ok_or_else(invalid)?;
            rows.push(row);
            row_start = row.week_end().succ_opt().ok_or_else(invalid)?;
        }

        Ok(MonthGrid {
            year,
            month,
            week_start,
            rows,
        })
    }

    /// The grid for the month containing `date`.
    pub fn containing(date: NaiveDate, week_start: WeekStart) -> OurdayResult<Self> {
        MonthGrid::new(date.year(), date.month(), week_start)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Whether `date` belongs to the displayed month rather than a filler day.
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First to last visible cell.
    pub fn visible_span(&self) -> Option<DateSpan> {
        let first = self.rows.first()?.week_start();
        let last = self.rows.last()?.week_end();
        Some(DateSpan::between(first, last))
    }
}
