//! Core engine for ourday, a calendar shared by two people.
//!
//! This crate turns stored schedules, public holidays and anniversaries into
//! one viewer-relative timeline, and lays that timeline out as lanes of bars
//! inside a week-by-week month grid:
//! - `perspective` re-labels ownership for whoever is looking
//! - `anniversary` and `holiday` generate synthetic single-day entities
//! - `timeline` merges and sorts everything
//! - `layout` buckets the timeline into week rows and packs lanes

pub mod anniversary;
pub mod category;
pub mod date_range;
pub mod edit;
pub mod entity;
pub mod error;
pub mod holiday;
pub mod layout;
pub mod perspective;
pub mod store;
pub mod timeline;

pub use category::Category;
pub use date_range::DateSpan;
pub use edit::ScheduleDraft;
pub use entity::{AnniversaryKind, AuthoredSchedule, DateRangeEntity, EntityKind, UserId};
pub use error::{OurdayError, OurdayResult};
pub use holiday::{Holiday, HolidayCache, HolidaySource, RefreshOutcome, RefreshSummary};
pub use layout::{MonthGrid, PlacedEntity, WeekLayout, WeekRow, WeekStart, layout_month};
pub use store::{MemoryScheduleStore, ScheduleStore};
pub use timeline::{ComposeOptions, TimelineComposer, TimelineInput};
