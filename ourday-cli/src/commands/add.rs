use anyhow::Result;
use ourday_core::date_range::parse_date;
use ourday_core::{Category, ScheduleDraft, ScheduleStore};
use owo_colors::OwoColorize;

use crate::commands::Session;
use crate::render::Render;

pub struct AddArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub category: Category,
    pub description: String,
}

pub fn run(mut session: Session, args: AddArgs) -> Result<()> {
    let author = session.viewer()?;

    let start_date = parse_date(&args.start)?;
    let end_date = match args.end.as_deref() {
        Some(end) => parse_date(end)?,
        None => start_date,
    };

    let draft = ScheduleDraft {
        title: args.title,
        description: args.description,
        start_date,
        end_date,
        category: args.category,
    };
    let id = uuid::Uuid::new_v4().to_string();
    let schedule = draft.into_new_schedule(id, &session.config.couple_id, &author)?;

    let created = session.store.create(schedule)?;

    println!(
        "{} {} {} {}",
        "Added".green(),
        created.title,
        created.category.render(),
        created.id.dimmed()
    );

    Ok(())
}
