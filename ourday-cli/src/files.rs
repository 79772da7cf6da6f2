//! On-disk state in the data directory.
//!
//! - `schedules.json`: authored schedules, written through `JsonScheduleStore`
//! - `holidays.json`: the holiday cache including its last refresh attempt,
//!   so the refresh cooldown is per device

use std::path::{Path, PathBuf};

use ourday_core::{
    AuthoredSchedule, HolidayCache, MemoryScheduleStore, OurdayError, OurdayResult,
    ScheduleStore,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

const SCHEDULES_FILE: &str = "schedules.json";
const HOLIDAYS_FILE: &str = "holidays.json";

fn storage_error(path: &Path, e: impl std::fmt::Display) -> OurdayError {
    OurdayError::Storage(format!("{}: {}", path.display(), e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> OurdayResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| storage_error(path, e))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| OurdayError::Serialization(format!("{}: {}", path.display(), e)))?;
    Ok(Some(value))
}

/// Write via a temp file and rename so a crash never leaves half a file.
fn write_json<T: Serialize>(path: &Path, value: &T) -> OurdayResult<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| storage_error(dir, e))?;
    }

    let content = serde_json::to_string_pretty(value)
        .map_err(|e| OurdayError::Serialization(e.to_string()))?;

    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, content).map_err(|e| storage_error(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| storage_error(path, e))?;
    Ok(())
}

/// Schedules kept in a JSON file, saved after every change.
pub struct JsonScheduleStore {
    path: PathBuf,
    inner: MemoryScheduleStore,
}

impl JsonScheduleStore {
    pub fn open(data_dir: &Path) -> OurdayResult<Self> {
        let path = data_dir.join(SCHEDULES_FILE);
        let schedules: Vec<AuthoredSchedule> = read_json(&path)?.unwrap_or_default();

        Ok(JsonScheduleStore {
            path,
            inner: MemoryScheduleStore::from_schedules(schedules),
        })
    }

    fn save(&self) -> OurdayResult<()> {
        let schedules: Vec<&AuthoredSchedule> = self.inner.all().collect();
        write_json(&self.path, &schedules)
    }
}

impl ScheduleStore for JsonScheduleStore {
    fn list(&self, couple_id: &str) -> OurdayResult<Vec<AuthoredSchedule>> {
        self.inner.list(couple_id)
    }

    fn get(&self, id: &str) -> OurdayResult<AuthoredSchedule> {
        self.inner.get(id)
    }

    fn create(&mut self, schedule: AuthoredSchedule) -> OurdayResult<AuthoredSchedule> {
        let created = self.inner.create(schedule)?;
        self.save()?;
        Ok(created)
    }

    fn update(&mut self, schedule: AuthoredSchedule) -> OurdayResult<AuthoredSchedule> {
        let updated = self.inner.update(schedule)?;
        self.save()?;
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> OurdayResult<()> {
        self.inner.delete(id)?;
        self.save()
    }
}

/// The cached holidays, or the bundled defaults if nothing was saved yet.
pub fn load_holiday_cache(data_dir: &Path) -> OurdayResult<HolidayCache> {
    Ok(read_json(&data_dir.join(HOLIDAYS_FILE))?.unwrap_or_default())
}

pub fn save_holiday_cache(data_dir: &Path, cache: &HolidayCache) -> OurdayResult<()> {
    write_json(&data_dir.join(HOLIDAYS_FILE), cache)
}
