mod common;

use common::{d, entity};
use ourday_core::layout::{WeekRow, allocate_lanes, layout_week};
use ourday_core::{MonthGrid, OurdayError, WeekStart, layout_month};
use pretty_assertions::assert_eq;

#[test]
fn march_2024_sunday_grid_has_six_full_rows() {
    let grid = MonthGrid::new(2024, 3, WeekStart::Sunday).unwrap();
    let rows = grid.rows();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].week_start(), d("2024-02-25"));
    assert_eq!(rows[1].week_start(), d("2024-03-03"));
    assert_eq!(rows[1].week_end(), d("2024-03-09"));
    assert_eq!(rows[5].week_end(), d("2024-04-06"));
    assert!(rows.windows(2).all(|w| w[0].week_end().succ_opt() == Some(w[1].week_start())));
    assert!(!grid.is_in_month(d("2024-02-25")));
    assert!(grid.is_in_month(d("2024-03-31")));
}

#[test]
fn monday_grid_starts_on_monday() {
    let grid = MonthGrid::new(2024, 3, WeekStart::Monday).unwrap();
    assert_eq!(grid.rows()[0].week_start(), d("2024-02-26"));
    assert_eq!(grid.rows().len(), 5);
    assert_eq!(grid.rows().last().unwrap().week_end(), d("2024-03-31"));
}

#[test]
fn february_starting_on_week_start_needs_four_rows() {
    // 2026-02-01 is a Sunday and February 2026 has 28 days.
    let grid = MonthGrid::new(2026, 2, WeekStart::Sunday).unwrap();
    assert_eq!(grid.rows().len(), 4);
    assert_eq!(grid.rows()[0].week_start(), d("2026-02-01"));
}

#[test]
fn invalid_month_is_rejected() {
    let err = MonthGrid::new(2024, 13, WeekStart::Sunday).unwrap_err();
    assert_eq!(err, OurdayError::Validation("Invalid month 2024-13".into()));
    assert_eq!(err.to_string(), "Validation error: Invalid month 2024-13");
}

#[test]
fn overlapping_bars_take_separate_lanes() {
    let row = WeekRow::starting(d("2024-03-03")).unwrap();
    let timeline = vec![
        entity("first", "2024-03-01", "2024-03-05"),
        entity("second", "2024-03-04", "2024-03-10"),
    ];

    let layout = layout_week(&row, &timeline);
    let first = &layout.placements[0];
    let second = &layout.placements[1];

    assert_eq!(first.entity.id, "first");
    assert_eq!(first.lane_index, 0);
    assert_eq!(first.start_col, 0);
    assert_eq!(first.end_col, 2);
    assert!(!first.is_segment_start);
    assert!(first.is_segment_end);

    assert_eq!(second.entity.id, "second");
    assert_eq!(second.lane_index, 1);
    assert_eq!(second.start_col, 1);
    assert_eq!(second.end_col, 6);
    assert!(second.is_segment_start);
    assert!(!second.is_segment_end);

    assert_eq!(layout.lane_count(), 2);
}

#[test]
fn freed_lane_is_reused_only_after_strictly_earlier_end() {
    let row = WeekRow::starting(d("2024-03-03")).unwrap();
    let timeline = vec![
        entity("a", "2024-03-03", "2024-03-04"),
        entity("touching", "2024-03-04", "2024-03-05"),
        entity("after", "2024-03-05", "2024-03-06"),
    ];

    let placements = allocate_lanes(&row, row.select(&timeline));
    let lanes: Vec<_> = placements
        .iter()
        .map(|p| (p.entity.id.as_str(), p.lane_index))
        .collect();

    assert_eq!(lanes, vec![("a", 0), ("touching", 1), ("after", 0)]);
}

#[test]
fn longer_bar_wins_the_lower_lane_on_same_start() {
    let row = WeekRow::starting(d("2024-03-03")).unwrap();
    let timeline = vec![
        entity("short", "2024-03-05", "2024-03-05"),
        entity("long", "2024-03-05", "2024-03-08"),
    ];

    let placements = allocate_lanes(&row, row.select(&timeline));
    assert_eq!(placements[0].entity.id, "long");
    assert_eq!(placements[0].lane_index, 0);
    assert_eq!(placements[1].entity.id, "short");
    assert_eq!(placements[1].lane_index, 1);
}

#[test]
fn three_week_bar_has_caps_only_at_true_ends() {
    let grid = MonthGrid::new(2024, 3, WeekStart::Sunday).unwrap();
    let timeline = vec![entity("trip", "2024-03-06", "2024-03-20")];

    let weeks = layout_month(&grid, &timeline);
    let segments: Vec<_> = weeks
        .iter()
        .flat_map(|w| w.placements.iter())
        .map(|p| (p.start_col, p.end_col, p.is_segment_start, p.is_segment_end))
        .collect();

    assert_eq!(
        segments,
        vec![(3, 6, true, false), (0, 6, false, false), (0, 3, false, true)]
    );
}

#[test]
fn overflow_counts_hidden_bars_per_day() {
    let row = WeekRow::starting(d("2024-03-03")).unwrap();
    let timeline = vec![
        entity("a", "2024-03-03", "2024-03-09"),
        entity("b", "2024-03-03", "2024-03-05"),
        entity("c", "2024-03-04", "2024-03-04"),
        entity("d", "2024-03-04", "2024-03-06"),
    ];

    let layout = layout_week(&row, &timeline);
    assert_eq!(layout.lane_count(), 4);
    assert_eq!(layout.visible(2).count(), 2);
    assert_eq!(layout.overflow_by_column(2), [0, 2, 1, 1, 0, 0, 0]);
    assert_eq!(layout.overflow_by_column(10), [0; 7]);
    assert_eq!(layout.at(0, 6).map(|p| p.entity.id.as_str()), Some("a"));
    assert_eq!(layout.at(1, 6), None);
}

#[test]
fn lanes_are_grouped_and_column_ordered() {
    let row = WeekRow::starting(d("2024-03-03")).unwrap();
    let timeline = vec![
        entity("late", "2024-03-08", "2024-03-09"),
        entity("early", "2024-03-03", "2024-03-04"),
    ];

    let layout = layout_week(&row, &timeline);
    let lanes = layout.lanes();
    assert_eq!(lanes.len(), 1);
    let ids: Vec<_> = lanes[0].iter().map(|p| p.entity.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "late"]);
}

#[test]
fn rows_outside_an_entity_do_not_see_it() {
    let row = WeekRow::starting(d("2024-03-10")).unwrap();
    let timeline = vec![
        entity("before", "2024-03-01", "2024-03-09"),
        entity("after", "2024-03-17", "2024-03-18"),
        entity("inside", "2024-03-16", "2024-03-17"),
    ];

    let selected: Vec<_> = row.select(&timeline).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(selected, vec!["inside"]);
}
