mod common;

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use common::d;
use ourday_core::holiday::DEFAULT_REFRESH_COOLDOWN;
use ourday_core::{Holiday, HolidayCache, HolidaySource, OurdayError, OurdayResult, RefreshOutcome};
use pretty_assertions::assert_eq;

/// Answers from a fixed table; years missing from it fail.
struct TableSource {
    years: BTreeMap<i32, Vec<Holiday>>,
}

impl HolidaySource for TableSource {
    async fn fetch(&self, year: i32) -> OurdayResult<Vec<Holiday>> {
        self.years
            .get(&year)
            .cloned()
            .ok_or(OurdayError::HolidaySource {
                year,
                message: "unavailable".into(),
            })
    }
}

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, h, m, 0).unwrap()
}

fn count_in_year(cache: &HolidayCache, year: i32) -> usize {
    cache.entries().iter().filter(|h| h.date.year() == year).count()
}

#[tokio::test]
async fn failed_year_keeps_cached_entries() {
    let mut cache = HolidayCache::default();
    let bundled_2026 = count_in_year(&cache, 2026);

    let source = TableSource {
        years: BTreeMap::from([(2025, vec![Holiday::new(d("2025-01-01"), "New Year")])]),
    };

    let outcome = cache
        .refresh(&source, &[2025, 2026], at(9, 0), DEFAULT_REFRESH_COOLDOWN)
        .await;

    let RefreshOutcome::Refreshed(summary) = outcome else {
        panic!("expected the refresh to run");
    };
    assert_eq!(summary.updated_years, vec![2025]);
    assert_eq!(summary.failed_years, vec![2026]);
    assert_eq!(count_in_year(&cache, 2025), 1);
    assert_eq!(count_in_year(&cache, 2026), bundled_2026);
    assert_eq!(summary.total_entries, 1 + bundled_2026);
}

#[tokio::test]
async fn refresh_inside_cooldown_reports_remaining_wait() {
    let mut cache = HolidayCache::default();
    let source = TableSource {
        years: BTreeMap::new(),
    };

    let first = cache
        .refresh(&source, &[2025], at(9, 0), DEFAULT_REFRESH_COOLDOWN)
        .await;
    assert!(matches!(first, RefreshOutcome::Refreshed(_)));
    assert_eq!(cache.last_refresh_attempt(), Some(at(9, 0)));

    let second = cache
        .refresh(&source, &[2025], at(9, 2), DEFAULT_REFRESH_COOLDOWN)
        .await;
    assert_eq!(
        second,
        RefreshOutcome::CoolingDown {
            remaining: Duration::from_secs(3 * 60)
        }
    );
    assert_eq!(cache.last_refresh_attempt(), Some(at(9, 0)));

    let third = cache
        .refresh(&source, &[2025], at(9, 5), DEFAULT_REFRESH_COOLDOWN)
        .await;
    assert!(matches!(third, RefreshOutcome::Refreshed(_)));
}

#[test]
fn attempt_recorded_in_the_future_does_not_block() {
    let json = serde_json::json!({
        "entries": [],
        "last_refresh_attempt": "2025-03-01T10:00:00Z",
    });
    let cache: HolidayCache = serde_json::from_value(json).unwrap();
    assert_eq!(cache.cooldown_remaining(at(9, 0), DEFAULT_REFRESH_COOLDOWN), None);
    assert_eq!(
        cache.cooldown_remaining(at(10, 1), DEFAULT_REFRESH_COOLDOWN),
        Some(Duration::from_secs(4 * 60))
    );
}

#[test]
fn fetched_years_replace_rather_than_append() {
    let mut cache = HolidayCache::from_entries(vec![
        Holiday::new(d("2025-05-05"), "Old"),
        Holiday::new(d("2024-12-25"), "Christmas"),
    ]);

    cache.merge(&BTreeMap::from([(
        2025,
        vec![Holiday::new(d("2025-05-05"), "Children's Day")],
    )]));

    let titles: Vec<_> = cache.entries().iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Christmas", "Children's Day"]);
}

#[test]
fn merging_twice_is_idempotent() {
    let fetched = BTreeMap::from([(
        2025,
        vec![
            Holiday::new(d("2025-10-06"), "추석"),
            Holiday::new(d("2025-05-05"), "어린이날"),
            Holiday::new(d("2025-05-05"), "부처님오신날"),
            Holiday::new(d("2025-05-05"), "어린이날"),
        ],
    )]);

    let mut cache = HolidayCache::from_entries(Vec::new());
    cache.merge(&fetched);
    let once = cache.entities();
    cache.merge(&fetched);
    let twice = cache.entities();

    assert_eq!(once, twice);
    assert_eq!(once.len(), 3);

    let ids: HashSet<_> = twice.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), twice.len());
    assert!(twice.windows(2).all(|w| w[0].start_date() <= w[1].start_date()));
    assert_eq!(twice[0].id, "holiday:2025-05-05:0");
    assert_eq!(twice[1].id, "holiday:2025-05-05:1");
}

#[test]
fn loaded_cache_is_deduplicated_and_sorted() {
    let cache: HolidayCache = serde_json::from_str(
        r#"{
            "entries": [
                {"date": "2025-12-25", "title": "기독탄신일"},
                {"date": "2025-01-01", "title": "신정"},
                {"date": "2025-01-01", "title": "신정"}
            ],
            "last_refresh_attempt": "2025-03-01T10:00:00Z"
        }"#,
    )
    .unwrap();

    let ids: Vec<_> = cache.entities().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["holiday:2025-01-01:0", "holiday:2025-12-25:0"]);
    assert_eq!(cache.last_refresh_attempt(), Some(at(10, 0)));
}
