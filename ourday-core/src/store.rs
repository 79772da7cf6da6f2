//! The CRUD collaborator that owns authored schedules.

use std::collections::BTreeMap;

use crate::entity::AuthoredSchedule;
use crate::error::{OurdayError, OurdayResult};

/// Create/read/update/delete for authored schedules.
///
/// The engine only ever calls `list`; the other operations are used by the
/// edit flow after `ScheduleDraft` has validated the input.
pub trait ScheduleStore {
    fn list(&self, couple_id: &str) -> OurdayResult<Vec<AuthoredSchedule>>;

    fn get(&self, id: &str) -> OurdayResult<AuthoredSchedule>;

    fn create(&mut self, schedule: AuthoredSchedule) -> OurdayResult<AuthoredSchedule>;

    fn update(&mut self, schedule: AuthoredSchedule) -> OurdayResult<AuthoredSchedule>;

    fn delete(&mut self, id: &str) -> OurdayResult<()>;
}

/// A `ScheduleStore` kept entirely in memory, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryScheduleStore {
    schedules: BTreeMap<String, AuthoredSchedule>,
}

impl MemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_schedules(schedules: impl IntoIterator<Item = AuthoredSchedule>) -> Self {
        MemoryScheduleStore {
            schedules: schedules.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    /// Every schedule regardless of couple.
    pub fn all(&self) -> impl Iterator<Item = &AuthoredSchedule> {
        self.schedules.values()
    }
}

impl ScheduleStore for MemoryScheduleStore {
    fn list(&self, couple_id: &str) -> OurdayResult<Vec<AuthoredSchedule>> {
        Ok(self
            .schedules
            .values()
            .filter(|s| s.couple_id == couple_id)
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> OurdayResult<AuthoredSchedule> {
        self.schedules
            .get(id)
            .cloned()
            .ok_or_else(|| OurdayError::NotFound(id.to_string()))
    }

    fn create(&mut self, schedule: AuthoredSchedule) -> OurdayResult<AuthoredSchedule> {
        if self.schedules.contains_key(&schedule.id) {
            return Err(OurdayError::Validation(format!(
                "Schedule '{}' already exists",
                schedule.id
            )));
        }
        self.schedules.insert(schedule.id.clone(), schedule.clone());
        Ok(schedule)
    }

    fn update(&mut self, schedule: AuthoredSchedule) -> OurdayResult<AuthoredSchedule> {
        match self.schedules.get_mut(&schedule.id) {
            Some(slot) => {
                *slot = schedule.clone();
                Ok(schedule)
            }
            None => Err(OurdayError::NotFound(schedule.id)),
        }
    }

    fn delete(&mut self, id: &str) -> OurdayResult<()> {
        self.schedules
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| OurdayError::NotFound(id.to_string()))
    }
}
