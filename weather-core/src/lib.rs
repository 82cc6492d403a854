//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration loaded from the environment
//! - The forecast provider abstraction and its OpenWeather client
//! - Field extraction and line formatting for forecast entries
//! - The report step that turns a fetch result into user-facing output
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod present;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::ForecastError;
pub use model::{FetchOutcome, ForecastEntry, ForecastResponse, LocationQuery};
pub use provider::{ForecastProvider, OpenWeatherProvider, provider_from_config};
pub use report::{Report, report_forecast};
