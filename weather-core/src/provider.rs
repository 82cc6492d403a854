use crate::{Config, FetchOutcome, LocationQuery, error::Result};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, query: &LocationQuery) -> Result<FetchOutcome>;
}

/// Construct the forecast provider from a loaded config.
pub fn provider_from_config(config: &Config) -> Box<dyn ForecastProvider> {
    Box::new(OpenWeatherProvider::new(
        config.api_key.clone(),
        config.endpoint.clone(),
    ))
}
