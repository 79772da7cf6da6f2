//! The edit boundary: turning what a viewer typed into a storable row.
//!
//! Everything that reaches the layout engine has passed through here (or
//! through `DateSpan` deserialization), so reversed ranges never get further.

use chrono::NaiveDate;

use crate::category::Category;
use crate::date_range::DateSpan;
use crate::entity::{AuthoredSchedule, DateRangeEntity, UserId};
use crate::error::{OurdayError, OurdayResult};
use crate::perspective::writer_category;

/// Form values as entered by the viewer. `category` is from the viewer's perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
}

impl ScheduleDraft {
    /// Prefill a draft from an entity the viewer is looking at.
    pub fn from_entity(entity: &DateRangeEntity) -> OurdayResult<Self> {
        if !entity.editable() {
            return Err(OurdayError::Validation(format!(
                "'{}' is generated and cannot be edited",
                entity.title
            )));
        }

        Ok(ScheduleDraft {
            title: entity.title.clone(),
            description: entity.description.clone(),
            start_date: entity.start_date(),
            end_date: entity.end_date(),
            category: entity.category,
        })
    }

    fn validate(&self) -> OurdayResult<DateSpan> {
        if self.title.trim().is_empty() {
            return Err(OurdayError::Validation("Title must not be empty".into()));
        }
        DateSpan::new(self.start_date, self.end_date)
    }

    /// A new row written by `author`. The author is the viewer, so the picked
    /// category is stored as is.
    pub fn into_new_schedule(
        self,
        id: String,
        couple_id: &str,
        author: &UserId,
    ) -> OurdayResult<AuthoredSchedule> {
        let span = self.validate()?;

        Ok(AuthoredSchedule {
            id,
            couple_id: couple_id.to_string(),
            writer_id: author.clone(),
            title: self.title.trim().to_string(),
            description: self.description,
            span,
            category: self.category,
            color: Some(self.category.color().to_string()),
        })
    }

    /// `existing` with this draft applied by `viewer`.
    ///
    /// The writer stays the same. If the viewer is not the writer, the picked
    /// category is flipped back into the writer's perspective before storing.
    pub fn apply_to(
        self,
        existing: &AuthoredSchedule,
        viewer: &UserId,
    ) -> OurdayResult<AuthoredSchedule> {
        let span = self.validate()?;
        let category = writer_category(self.category, &existing.writer_id, viewer);

        Ok(AuthoredSchedule {
            id: existing.id.clone(),
            couple_id: existing.couple_id.clone(),
            writer_id: existing.writer_id.clone(),
            title: self.title.trim().to_string(),
            description: self.description,
            span,
            category,
            color: Some(category.color().to_string()),
        })
    }
}
