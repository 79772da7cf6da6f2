//! Month layout: week bucketing plus lane packing.
//!
//! The layout is recomputed from scratch for every (month, timeline) pair.
//! Nothing here caps the number of lanes; `WeekLayout::visible` and
//! `WeekLayout::overflow_by_column` let a renderer fit a fixed cell height.

mod grid;
mod lanes;

use tracing::debug;

pub use grid::{DAYS_PER_WEEK, MonthGrid, WeekRow, WeekStart};
pub use lanes::{PlacedEntity, allocate_lanes};

use crate::entity::DateRangeEntity;

/// Lane assignments for one week row.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout<'a> {
    pub row: WeekRow,
    pub placements: Vec<PlacedEntity<'a>>,
}

impl<'a> WeekLayout<'a> {
    /// Number of lanes in use in this row.
    pub fn lane_count(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.lane_index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Placements grouped by lane, lane 0 first, each lane ordered by column.
    pub fn lanes(&self) -> Vec<Vec<&PlacedEntity<'a>>> {
        let mut lanes: Vec<Vec<&PlacedEntity<'a>>> = vec![Vec::new(); self.lane_count()];
        for placement in &self.placements {
            lanes[placement.lane_index].push(placement);
        }
        for lane in &mut lanes {
            lane.sort_by_key(|p| p.start_col);
        }
        lanes
    }

    /// Placements that fit in the first `max_lanes` lanes.
    pub fn visible(&self, max_lanes: usize) -> impl Iterator<Item = &PlacedEntity<'a>> {
        self.placements
            .iter()
            .filter(move |p| p.lane_index < max_lanes)
    }

    /// Per column, how many placements are hidden when only `max_lanes` lanes show.
    pub fn overflow_by_column(&self, max_lanes: usize) -> [usize; DAYS_PER_WEEK] {
        let mut hidden = [0; DAYS_PER_WEEK];
        for placement in self.placements.iter().filter(|p| p.lane_index >= max_lanes) {
            for count in &mut hidden[placement.start_col..=placement.end_col] {
                *count += 1;
            }
        }
        hidden
    }

    /// The placement covering `col` in `lane`, if any.
    pub fn at(&self, lane: usize, col: usize) -> Option<&PlacedEntity<'a>> {
        self.placements
            .iter()
            .find(|p| p.lane_index == lane && p.covers_column(col))
    }
}

/// Bucket `timeline` into `row` and pack its lanes.
pub fn layout_week<'a>(row: &WeekRow, timeline: &'a [DateRangeEntity]) -> WeekLayout<'a> {
    WeekLayout {
        row: *row,
        placements: allocate_lanes(row, row.select(timeline)),
    }
}

/// Layout every row of `grid`. Entities spanning several rows appear, clipped,
/// in each of them.
pub fn layout_month<'a>(grid: &MonthGrid, timeline: &'a [DateRangeEntity]) -> Vec<WeekLayout<'a>> {
    let weeks: Vec<WeekLayout<'a>> = grid
        .rows()
        .iter()
        .map(|row| layout_week(row, timeline))
        .collect();

    debug!(
        year = grid.year(),
        month = grid.month(),
        rows = weeks.len(),
        max_lanes = weeks.iter().map(WeekLayout::lane_count).max().unwrap_or(0),
        "month layout computed"
    );

    weeks
}
