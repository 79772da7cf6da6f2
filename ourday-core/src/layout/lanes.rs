//! Lane assignment for multi-day bars within one week row.
//!
//! Entities are placed in start-date order, longer first on ties. Each goes
//! into the lowest lane that was freed before it starts. A lane is described
//! by the end date of the last entity placed in it: since placements arrive in
//! start order, nothing earlier can still be occupying it past that date.

use std::cmp::Reverse;

use chrono::NaiveDate;

use super::grid::{DAYS_PER_WEEK, WeekRow};
use crate::entity::DateRangeEntity;

/// One entity positioned inside one week row.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEntity<'a> {
    pub entity: &'a DateRangeEntity,
    pub lane_index: usize,
    /// First covered column in this row (0 if the entity started earlier).
    pub start_col: usize,
    /// Last covered column in this row (6 if the entity continues past it).
    pub end_col: usize,
    /// The entity's true start is in this row.
    pub is_segment_start: bool,
    /// The entity's true end is in this row.
    pub is_segment_end: bool,
}

impl PlacedEntity<'_> {
    /// Number of columns the bar spans in this row.
    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    pub fn covers_column(&self, col: usize) -> bool {
        self.start_col <= col && col <= self.end_col
    }
}

/// Assign lanes to the entities intersecting `row`.
///
/// Entities must already intersect the row and satisfy `start <= end`.
/// Placements come back in placement order.
pub fn allocate_lanes<'a>(
    row: &WeekRow,
    mut entities: Vec<&'a DateRangeEntity>,
) -> Vec<PlacedEntity<'a>> {
    entities.sort_by_key(|e| (e.start_date(), Reverse(e.span.days())));

    let mut lane_ends: Vec<NaiveDate> = Vec::new();
    let mut placements = Vec::with_capacity(entities.len());

    for entity in entities {
        debug_assert!(entity.span.intersects(&row.span()));

        let lane_index = match lane_ends.iter().position(|end| *end < entity.start_date()) {
            Some(free) => {
                lane_ends[free] = entity.end_date();
                free
            }
            None => {
                lane_ends.push(entity.end_date());
                lane_ends.len() - 1
            }
        };

        let start_in_row = row.column_of(entity.start_date());
        let end_in_row = row.column_of(entity.end_date());

        placements.push(PlacedEntity {
            entity,
            lane_index,
            start_col: start_in_row.unwrap_or(0),
            end_col: end_in_row.unwrap_or(DAYS_PER_WEEK - 1),
            is_segment_start: start_in_row.is_some(),
            is_segment_end: end_in_row.is_some(),
        });
    }

    placements
}
