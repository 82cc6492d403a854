//! Field accessors for a single [`ForecastEntry`].

use chrono::{DateTime, Local};

use crate::error::{ForecastError, Result};
use crate::model::ForecastEntry;

/// Temperature in Fahrenheit (requests are always made with imperial units).
pub fn extract_temperature(entry: &ForecastEntry) -> f64 {
    entry.main.temp
}

pub fn extract_description(entry: &ForecastEntry) -> Result<&str> {
    entry
        .weather
        .first()
        .map(|w| w.description.as_str())
        .ok_or_else(|| {
            ForecastError::MalformedResponse("forecast entry has no weather conditions".into())
        })
}

/// Entry timestamp in the local time zone.
pub fn extract_date(entry: &ForecastEntry) -> Result<DateTime<Local>> {
    DateTime::from_timestamp(entry.dt, 0)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| {
            ForecastError::MalformedResponse(format!("timestamp {} is out of range", entry.dt))
        })
}
