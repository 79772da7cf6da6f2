use anyhow::Result;
use ourday_core::anniversary::{generate, horizon_year};
use ourday_core::date_range::format_date;
use owo_colors::OwoColorize;

use crate::commands::Session;
use crate::render::paint;

pub fn run(session: Session) -> Result<()> {
    let Some(anchor) = session.config.anniversary_date else {
        println!("{}", "No anniversary_date configured.".dimmed());
        println!(
            "{}",
            "Add anniversary_date = \"YYYY-MM-DD\" to your config.toml".dimmed()
        );
        return Ok(());
    };

    let horizon = horizon_year(session.today);
    println!(
        "{}",
        format!("Since {} (through {})", format_date(anchor), horizon).bold()
    );

    for entity in generate(Some(anchor), horizon) {
        let date = entity.start_date();
        let countdown = match (date - session.today).num_days() {
            0 => "today".to_string(),
            n if n > 0 => format!("D-{n}"),
            _ => String::new(),
        };
        let line = format!(
            "  {}  {} {}",
            format_date(date),
            paint(&entity.color, &entity.title),
            countdown
        );

        if date < session.today {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
