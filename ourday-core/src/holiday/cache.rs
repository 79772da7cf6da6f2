//! Locally cached holiday list with rate-limited refresh.

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Holiday, HolidaySource, bundled_holidays, holiday_entities};
use crate::entity::DateRangeEntity;

/// Minimum time between two refresh attempts.
pub const DEFAULT_REFRESH_COOLDOWN: Duration = Duration::from_secs(5 * 60);

/// The cached holidays plus when a refresh was last attempted.
///
/// Entries are always deduplicated and sorted by date, including after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredCache")]
pub struct HolidayCache {
    entries: Vec<Holiday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_refresh_attempt: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct StoredCache {
    entries: Vec<Holiday>,
    #[serde(default)]
    last_refresh_attempt: Option<DateTime<Utc>>,
}

impl From<StoredCache> for HolidayCache {
    fn from(stored: StoredCache) -> Self {
        let mut cache = HolidayCache::from_entries(stored.entries);
        cache.last_refresh_attempt = stored.last_refresh_attempt;
        cache
    }
}

impl Default for HolidayCache {
    /// Bundled holidays, never refreshed.
    fn default() -> Self {
        HolidayCache::from_entries(bundled_holidays())
    }
}

/// Result of asking for a refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Refreshed(RefreshSummary),
    /// Rejected: the previous attempt was too recent.
    CoolingDown { remaining: Duration },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefreshSummary {
    /// Years whose entries were replaced by fetched data.
    pub updated_years: Vec<i32>,
    /// Years the source failed to deliver; their cached entries are untouched.
    pub failed_years: Vec<i32>,
    pub total_entries: usize,
}

impl HolidayCache {
    /// Build a cache from arbitrary entries, deduplicated and sorted by date.
    pub fn from_entries(entries: Vec<Holiday>) -> Self {
        let mut cache = HolidayCache {
            entries,
            last_refresh_attempt: None,
        };
        normalize(&mut cache.entries);
        cache
    }

    pub fn entries(&self) -> &[Holiday] {
        &self.entries
    }

    pub fn last_refresh_attempt(&self) -> Option<DateTime<Utc>> {
        self.last_refresh_attempt
    }

    pub fn entities(&self) -> Vec<DateRangeEntity> {
        holiday_entities(&self.entries)
    }

    /// Time left before another refresh is allowed, or `None` if one is allowed now.
    ///
    /// A recorded attempt in the future (clock moved backwards) does not block.
    pub fn cooldown_remaining(&self, now: DateTime<Utc>, cooldown: Duration) -> Option<Duration> {
        let last = self.last_refresh_attempt?;
        let elapsed = (now - last).to_std().ok()?;
        cooldown.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Replace the entries of every year in `fetched` with the fetched ones.
    ///
    /// Years not present in `fetched` keep their cached entries. The result is
    /// deduplicated by date and title, then sorted by date.
    pub fn merge(&mut self, fetched: &BTreeMap<i32, Vec<Holiday>>) {
        self.entries
            .retain(|holiday| !fetched.contains_key(&holiday.date.year()));
        self.entries.extend(fetched.values().flatten().cloned());
        normalize(&mut self.entries);
    }

    /// Fetch `years` from `source` and merge whatever succeeds.
    ///
    /// Rejected with the remaining wait if the previous attempt is younger than
    /// `cooldown`. Every accepted attempt is recorded, successful or not.
    pub async fn refresh<S: HolidaySource>(
        &mut self,
        source: &S,
        years: &[i32],
        now: DateTime<Utc>,
        cooldown: Duration,
    ) -> RefreshOutcome {
        if let Some(remaining) = self.cooldown_remaining(now, cooldown) {
            info!(remaining_secs = remaining.as_secs(), "holiday refresh rejected, cooling down");
            return RefreshOutcome::CoolingDown { remaining };
        }
        self.last_refresh_attempt = Some(now);

        let mut fetched = BTreeMap::new();
        let mut failed_years = Vec::new();

        for &year in years {
            match source.fetch(year).await {
                Ok(holidays) => {
                    fetched.insert(year, holidays);
                }
                Err(e) => {
                    warn!(year, error = %e, "holiday fetch failed, keeping cached entries");
                    failed_years.push(year);
                }
            }
        }

        self.merge(&fetched);

        let summary = RefreshSummary {
            updated_years: fetched.keys().copied().collect(),
            failed_years,
            total_entries: self.entries.len(),
        };
        info!(
            updated = ?summary.updated_years,
            failed = ?summary.failed_years,
            total = summary.total_entries,
            "holiday refresh finished"
        );

        RefreshOutcome::Refreshed(summary)
    }
}

fn normalize(entries: &mut Vec<Holiday>) {
    let mut seen = HashSet::new();
    entries.retain(|holiday| seen.insert((holiday.date, holiday.title.clone())));
    entries.sort_by_key(|holiday| holiday.date);
}
