//! Viewer-relative ownership labels.
//!
//! A stored row says `mine` from its writer's point of view. When the other
//! participant looks at it, `mine` has to read as `partner` and vice versa.
//! Both directions are the same swap, so applying one after the other is the
//! identity.

use crate::category::Category;
use crate::entity::{AuthoredSchedule, DateRangeEntity, EntityKind, UserId};

/// Category of a row written by `writer` as seen by `viewer`.
pub fn viewer_category(stored: Category, writer: &UserId, viewer: &UserId) -> Category {
    if stored == Category::Shared || writer == viewer {
        stored
    } else {
        stored.inverted()
    }
}

/// Category to persist when `viewer` picked `picked` on a row owned by `writer`.
pub fn writer_category(picked: Category, writer: &UserId, viewer: &UserId) -> Category {
    viewer_category(picked, viewer, writer)
}

/// Re-label a stored schedule for `viewer`.
///
/// The color always comes from the final category; whatever color the row
/// carries is ignored.
pub fn to_viewer(schedule: &AuthoredSchedule, viewer: &UserId) -> DateRangeEntity {
    let category = viewer_category(schedule.category, &schedule.writer_id, viewer);

    DateRangeEntity {
        id: schedule.id.clone(),
        title: schedule.title.clone(),
        description: schedule.description.clone(),
        span: schedule.span,
        color: category.color().to_string(),
        category,
        kind: EntityKind::Authored {
            writer_id: schedule.writer_id.clone(),
        },
    }
}

/// Re-label every schedule in `schedules` for `viewer`.
pub fn all_to_viewer(schedules: &[AuthoredSchedule], viewer: &UserId) -> Vec<DateRangeEntity> {
    schedules.iter().map(|s| to_viewer(s, viewer)).collect()
}
