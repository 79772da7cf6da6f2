//! Error types for the ourday engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in ourday operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OurdayError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schedule not found: {0}")]
    NotFound(String),

    #[error("Holiday source error for {year}: {message}")]
    HolidaySource { year: i32, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for ourday operations.
pub type OurdayResult<T> = Result<T, OurdayError>;
