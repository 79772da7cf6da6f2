//! Public holidays from the Nager.Date API.

use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use ourday_core::{Holiday, HolidaySource, OurdayError, OurdayResult};
use serde::Deserialize;
use tracing::debug;

const NAGER_BASE_URL: &str = "https://date.nager.at/api/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NagerHoliday {
    date: NaiveDate,
    local_name: String,
}

pub struct NagerHolidaySource {
    client: reqwest::Client,
    base_url: String,
    country: String,
}

impl NagerHolidaySource {
    pub fn new(country: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Could not build HTTP client")?;

        Ok(NagerHolidaySource {
            client,
            base_url: NAGER_BASE_URL.to_string(),
            country: country.to_uppercase(),
        })
    }
}

impl HolidaySource for NagerHolidaySource {
    async fn fetch(&self, year: i32) -> OurdayResult<Vec<Holiday>> {
        let source_error = |message: String| OurdayError::HolidaySource { year, message };

        let url = format!("{}/PublicHolidays/{}/{}", self.base_url, year, self.country);
        debug!(%url, "fetching holidays");
        let days: Vec<NagerHoliday> = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| source_error(e.to_string()))?
            .json()
            .await
            .map_err(|e| source_error(format!("Failed to parse response: {e}")))?;

        Ok(days
            .into_iter()
            .map(|day| Holiday::new(day.date, day.local_name))
            .collect())
    }
}
