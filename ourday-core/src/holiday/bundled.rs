//! Holidays shipped with the crate, used until the first successful refresh.

use chrono::NaiveDate;

use super::Holiday;

// Korean public holidays, including substitute days.
const BUNDLED: &[(i32, u32, u32, &str)] = &[
    (2025, 1, 1, "신정"),
    (2025, 1, 28, "설날 연휴"),
    (2025, 1, 29, "설날"),
    (2025, 1, 30, "설날 연휴"),
    (2025, 3, 1, "삼일절"),
    (2025, 3, 3, "대체공휴일"),
    (2025, 5, 5, "어린이날"),
    (2025, 5, 5, "부처님오신날"),
    (2025, 5, 6, "대체공휴일"),
    (2025, 6, 3, "대통령선거일"),
    (2025, 6, 6, "현충일"),
    (2025, 8, 15, "광복절"),
    (2025, 10, 3, "개천절"),
    (2025, 10, 5, "추석 연휴"),
    (2025, 10, 6, "추석"),
    (2025, 10, 7, "추석 연휴"),
    (2025, 10, 8, "대체공휴일"),
    (2025, 10, 9, "한글날"),
    (2025, 12, 25, "성탄절"),
    (2026, 1, 1, "신정"),
    (2026, 2, 16, "설날 연휴"),
    (2026, 2, 17, "설날"),
    (2026, 2, 18, "설날 연휴"),
    (2026, 3, 1, "삼일절"),
    (2026, 3, 2, "대체공휴일"),
    (2026, 5, 5, "어린이날"),
    (2026, 5, 24, "부처님오신날"),
    (2026, 5, 25, "대체공휴일"),
    (2026, 6, 3, "전국동시지방선거"),
    (2026, 6, 6, "현충일"),
    (2026, 8, 15, "광복절"),
    (2026, 8, 17, "대체공휴일"),
    (2026, 9, 24, "추석 연휴"),
    (2026, 9, 25, "추석"),
    (2026, 9, 26, "추석 연휴"),
    (2026, 10, 3, "개천절"),
    (2026, 10, 5, "대체공휴일"),
    (2026, 10, 9, "한글날"),
    (2026, 12, 25, "성탄절"),
];

/// The bundled default holiday list, sorted by date.
pub fn bundled_holidays() -> Vec<Holiday> {
    BUNDLED
        .iter()
        .filter_map(|&(y, m, d, title)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Holiday::new(date, title))
        })
        .collect()
}
