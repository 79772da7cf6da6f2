use anyhow::Result;
use chrono::Datelike;
use ourday_core::{MonthGrid, layout_month};

use crate::commands::Session;
use crate::render::render_month;

pub fn run(session: Session, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let viewer = session.viewer()?;

    let grid = MonthGrid::new(
        year.unwrap_or(session.today.year()),
        month.unwrap_or(session.today.month()),
        session.config.week_start,
    )?;

    let timeline = match grid.visible_span() {
        Some(window) => session.timeline(&viewer, Some(&window))?,
        None => Vec::new(),
    };
    let weeks = layout_month(&grid, &timeline);

    println!(
        "{}",
        render_month(&grid, &weeks, session.config.max_visible_lanes, session.today)
    );

    Ok(())
}
