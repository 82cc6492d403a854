use std::path::PathBuf;

use crate::error::{ForecastError, Result};

pub const API_KEY_VAR: &str = "WEATHER_KEY";
pub const ENDPOINT_VAR: &str = "WEATHER_API_URL";
pub const LOG_FILE_VAR: &str = "WEATHER_LOG";

pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/forecast";
pub const DEFAULT_LOG_FILE: &str = "weather.log";

/// Runtime configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub log_file: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Config {
    /// Load config through a variable lookup, usually `std::env::var`.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ForecastError::MissingApiKey(API_KEY_VAR))?;
        let endpoint = get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let log_file = get(LOG_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

        Ok(Self {
            api_key,
            endpoint,
            log_file,
        })
    }
}
