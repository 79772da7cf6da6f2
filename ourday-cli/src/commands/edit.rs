use anyhow::{Result, bail};
use ourday_core::date_range::parse_date;
use ourday_core::perspective::to_viewer;
use ourday_core::{Category, ScheduleDraft, ScheduleStore};
use owo_colors::OwoColorize;

use crate::commands::Session;
use crate::render::Render;

pub struct EditArgs {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    /// As seen by the viewer
    pub category: Option<Category>,
    pub description: Option<String>,
}

pub fn run(mut session: Session, id: &str, args: EditArgs) -> Result<()> {
    let viewer = session.viewer()?;

    let existing = session.store.get(id)?;
    if existing.couple_id != session.config.couple_id {
        bail!("Schedule {} belongs to another calendar", id);
    }

    // Prefill from what the viewer sees, so categories are in their perspective.
    let mut draft = ScheduleDraft::from_entity(&to_viewer(&existing, &viewer))?;

    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(start) = args.start.as_deref() {
        draft.start_date = parse_date(start)?;
    }
    if let Some(end) = args.end.as_deref() {
        draft.end_date = parse_date(end)?;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }

    let updated = session.store.update(draft.apply_to(&existing, &viewer)?)?;
    let seen = to_viewer(&updated, &viewer);

    println!(
        "{} {} {} {}",
        "Updated".green(),
        seen.title,
        seen.category.render(),
        seen.span.to_string().dimmed()
    );

    Ok(())
}
