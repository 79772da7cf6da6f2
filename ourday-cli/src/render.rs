//! Terminal rendering for ourday-core types.
//!
//! This module provides extension traits and helpers that add colored terminal
//! rendering to core types using owo_colors.

use chrono::{Datelike, NaiveDate};
use ourday_core::layout::DAYS_PER_WEEK;
use ourday_core::{Category, DateRangeEntity, EntityKind, MonthGrid, PlacedEntity, WeekLayout};
use owo_colors::OwoColorize;

/// Width of one day cell in characters.
const CELL_WIDTH: usize = 12;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        paint(Category::color(*self), &format!("[{}]", self))
    }
}

impl Render for DateRangeEntity {
    fn render(&self) -> String {
        let tag = match &self.kind {
            EntityKind::Authored { .. } => self.category.render(),
            EntityKind::Holiday | EntityKind::Anniversary { .. } => {
                format!("({})", self.description).dimmed().to_string()
            }
        };
        format!("{} {}", paint(&self.color, &self.title), tag)
    }
}

/// Color `text` with a `#RRGGBB` color, or leave it plain if the color is malformed.
pub fn paint(hex: &str, text: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Cut or pad `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat_n(' ', width - len));
    fitted
}

/// One bar segment: a cap at true ends, a flat edge where it continues.
fn render_bar(placed: &PlacedEntity<'_>) -> String {
    let width = placed.width() * CELL_WIDTH - 1;
    let left = if placed.is_segment_start { '[' } else { '<' };
    let right = if placed.is_segment_end { ']' } else { '>' };
    let inner = fit(&placed.entity.title, width.saturating_sub(2));
    format!("{} ", paint(&placed.entity.color, &format!("{left}{inner}{right}")))
}

fn render_day_numbers(
    grid: &MonthGrid,
    week: &WeekLayout<'_>,
    today: NaiveDate,
    holidays: &[NaiveDate],
) -> String {
    week.row
        .days()
        .iter()
        .map(|day| {
            let label = fit(&day.day().to_string(), CELL_WIDTH);
            if !grid.is_in_month(*day) {
                label.dimmed().to_string()
            } else if *day == today {
                label.bold().underline().to_string()
            } else if holidays.contains(day) {
                label.red().to_string()
            } else {
                label
            }
        })
        .collect()
}

fn render_lane(week: &WeekLayout<'_>, lane: usize) -> String {
    let mut line = String::new();
    let mut col = 0;
    while col < DAYS_PER_WEEK {
        match week.at(lane, col) {
            Some(placed) => {
                line.push_str(&render_bar(placed));
                col = placed.end_col + 1;
            }
            None => {
                line.push_str(&" ".repeat(CELL_WIDTH));
                col += 1;
            }
        }
    }
    line.trim_end().to_string()
}

fn render_overflow(hidden: &[usize; DAYS_PER_WEEK]) -> String {
    hidden
        .iter()
        .map(|&n| {
            if n == 0 {
                " ".repeat(CELL_WIDTH)
            } else {
                fit(&format!("+{n} more"), CELL_WIDTH).dimmed().to_string()
            }
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Render a month grid with up to `max_lanes` bars per week row.
pub fn render_month(
    grid: &MonthGrid,
    weeks: &[WeekLayout<'_>],
    max_lanes: usize,
    today: NaiveDate,
) -> String {
    let mut lines = Vec::new();

    if let Some(first) = NaiveDate::from_ymd_opt(grid.year(), grid.month(), 1) {
        lines.push(first.format("%B %Y").to_string().bold().to_string());
    }

    if let Some(first_row) = grid.rows().first() {
        let header: String = first_row
            .days()
            .iter()
            .map(|day| fit(&day.format("%a").to_string(), CELL_WIDTH))
            .collect();
        lines.push(header.dimmed().to_string());
    }

    for week in weeks {
        let holidays: Vec<NaiveDate> = week
            .placements
            .iter()
            .filter(|p| p.entity.kind == EntityKind::Holiday)
            .map(|p| p.entity.start_date())
            .collect();

        lines.push(render_day_numbers(grid, week, today, &holidays));
        for lane in 0..week.lane_count().min(max_lanes) {
            lines.push(render_lane(week, lane));
        }

        let hidden = week.overflow_by_column(max_lanes);
        if hidden.iter().any(|&n| n > 0) {
            lines.push(render_overflow(&hidden));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ourday_core::category::MINE_COLOR;
    use ourday_core::{DateSpan, UserId, WeekStart, layout_month};

    /// Drop ANSI escape sequences so assertions see only the glyphs.
    fn plain(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\x1b') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    fn trip() -> DateRangeEntity {
        DateRangeEntity {
            id: "trip".into(),
            title: "Trip".into(),
            description: String::new(),
            span: DateSpan::parse("2024-03-08", "2024-03-12").unwrap(),
            color: MINE_COLOR.to_string(),
            category: Category::Mine,
            kind: EntityKind::Authored {
                writer_id: UserId::new("alice"),
            },
        }
    }

    #[test]
    fn category_tag_uses_its_name() {
        assert_eq!(plain(&Category::Partner.render()), "[partner]");
        assert_eq!(plain(&trip().render()), "Trip [mine]");
    }

    #[test]
    fn bars_are_capped_at_true_ends_and_arrowed_where_they_continue() {
        let timeline = vec![trip()];
        let grid = MonthGrid::new(2024, 3, WeekStart::Sunday).unwrap();
        let weeks = layout_month(&grid, &timeline);

        // Rows start Feb 25, Mar 3 and Mar 10.
        let first = plain(&render_lane(&weeks[1], 0));
        let second = plain(&render_lane(&weeks[2], 0));

        assert!(first.trim_start().starts_with("[Trip"));
        assert!(first.ends_with('>'));
        assert!(second.starts_with("<Trip"));
        assert!(second.ends_with(']'));
    }

    #[test]
    fn hidden_lanes_collapse_into_a_more_count() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let timeline: Vec<_> = (0..4)
            .map(|i| DateRangeEntity::holiday(format!("h{i}"), "Day", day))
            .collect();
        let grid = MonthGrid::new(2024, 3, WeekStart::Sunday).unwrap();
        let weeks = layout_month(&grid, &timeline);
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

        let out = plain(&render_month(&grid, &weeks, 3, today));

        assert!(out.starts_with("March 2024"));
        assert_eq!(out.matches("[Day").count(), 3);
        assert_eq!(out.matches("+1 more").count(), 1);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#FF8FA3"), Some((0xFF, 0x8F, 0xA3)));
        assert_eq!(parse_hex("FF8FA3"), None);
        assert_eq!(parse_hex("#FF8"), None);
        assert_eq!(parse_hex("#GG0000"), None);
    }

    #[test]
    fn fit_pads_and_truncates_by_chars() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("성탄절 연휴", 3), "성탄절");
    }
}
