use anyhow::Result;
use chrono::{Days, NaiveDate};
use ourday_core::DateSpan;
use ourday_core::date_range::{format_date, parse_date};
use owo_colors::OwoColorize;

use crate::commands::{Session, format_date_label};
use crate::render::Render;

const DEFAULT_WINDOW_DAYS: u64 = 30;

pub fn run(session: Session, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let viewer = session.viewer()?;

    let from = match from {
        Some(s) => parse_date(s)?,
        None => session.today,
    };
    let to = match to {
        Some(s) => parse_date(s)?,
        None => from
            .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX),
    };
    let window = DateSpan::new(from, to)?;

    let timeline = session.timeline(&viewer, Some(&window))?;

    if timeline.is_empty() {
        println!("{}", "Nothing scheduled".dimmed());
        return Ok(());
    }

    // Timeline is sorted by start date; entries that began before the window
    // are listed under its first day.
    let mut current_date = None;

    for entity in &timeline {
        let shown_on = entity.start_date().max(from);

        if current_date != Some(shown_on) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(shown_on, session.today).bold());
            current_date = Some(shown_on);
        }

        let until = if entity.span.days() > 1 {
            format!(" until {}", format_date(entity.end_date()))
                .dimmed()
                .to_string()
        } else {
            String::new()
        };
        let id = if entity.editable() {
            format!(" {}", entity.id).dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{}{}", entity.render(), until, id);
    }

    Ok(())
}
