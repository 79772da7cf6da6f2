use std::time::Duration;

use anyhow::Result;
use chrono::{Datelike, Utc};
use ourday_core::RefreshOutcome;
use ourday_core::anniversary::horizon_year;
use ourday_core::category::HOLIDAY_COLOR;
use ourday_core::date_range::format_date;
use owo_colors::OwoColorize;

use crate::commands::Session;
use crate::nager::NagerHolidaySource;
use crate::render::paint;

pub fn list(session: Session, year: Option<i32>) -> Result<()> {
    let holidays: Vec<_> = session
        .holidays
        .entries()
        .iter()
        .filter(|h| year.is_none_or(|y| h.date.year() == y))
        .collect();

    if holidays.is_empty() {
        println!("{}", "No holidays cached".dimmed());
        return Ok(());
    }

    for holiday in holidays {
        println!(
            "  {}  {}",
            format_date(holiday.date),
            paint(HOLIDAY_COLOR, &holiday.title)
        );
    }

    if let Some(at) = session.holidays.last_refresh_attempt() {
        println!();
        println!("{}", format!("Last refresh: {}", at.format("%Y-%m-%d %H:%M UTC")).dimmed());
    }

    Ok(())
}

pub async fn refresh(mut session: Session, years: Vec<i32>) -> Result<()> {
    let years = if years.is_empty() {
        (session.today.year()..=horizon_year(session.today)).collect()
    } else {
        years
    };

    let source = NagerHolidaySource::new(&session.config.holiday_country)?;
    let cooldown = session.config.refresh_cooldown()?;

    let outcome = session
        .holidays
        .refresh(&source, &years, Utc::now(), cooldown)
        .await;

    match outcome {
        RefreshOutcome::CoolingDown { remaining } => {
            // Whole seconds read better than humantime's sub-second output.
            let remaining = Duration::from_secs(remaining.as_secs().max(1));
            println!(
                "{}",
                format!(
                    "Refreshed recently. Try again in {}",
                    humantime::format_duration(remaining)
                )
                .yellow()
            );
        }
        RefreshOutcome::Refreshed(summary) => {
            session.save_holidays()?;

            for year in &summary.updated_years {
                println!("  {} {}", "✓".green(), year);
            }
            for year in &summary.failed_years {
                println!("  {} {} {}", "✗".red(), year, "(kept cached entries)".dimmed());
            }
            println!(
                "{}",
                format!("{} holidays cached", summary.total_entries).dimmed()
            );
        }
    }

    Ok(())
}
