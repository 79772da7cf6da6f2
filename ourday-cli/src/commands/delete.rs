use anyhow::{Result, bail};
use ourday_core::ScheduleStore;
use owo_colors::OwoColorize;

use crate::commands::Session;

pub fn run(mut session: Session, id: &str) -> Result<()> {
    let existing = session.store.get(id)?;
    if existing.couple_id != session.config.couple_id {
        bail!("Schedule {} belongs to another calendar", id);
    }

    session.store.delete(id)?;
    println!("{} {}", "Deleted".red(), existing.title);

    Ok(())
}
