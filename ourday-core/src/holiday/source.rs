use std::future::Future;

use crate::error::OurdayResult;

use super::Holiday;

/// Somewhere holidays can be fetched from, one year at a time.
///
/// Each year may fail on its own; the cache keeps whatever years succeed.
pub trait HolidaySource {
    fn fetch(&self, year: i32) -> impl Future<Output = OurdayResult<Vec<Holiday>>> + Send;
}
