use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{
    error::{ForecastError, Result},
    model::{FetchOutcome, ForecastResponse, LocationQuery},
};

use super::ForecastProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn fetch_forecast(&self, query: &LocationQuery) -> Result<FetchOutcome> {
        let location = query.query_string();
        debug!(endpoint = %self.endpoint, %location, "requesting forecast");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", location.as_str()),
                ("units", "imperial"),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "forecast response received");

        match status {
            StatusCode::OK => {
                let parsed: ForecastResponse = serde_json::from_str(&body)?;
                Ok(FetchOutcome::Found(parsed.list))
            }
            StatusCode::NOT_FOUND => Ok(FetchOutcome::NotFound),
            StatusCode::UNAUTHORIZED => Err(ForecastError::Authentication {
                body: truncate_body(&body),
            }),
            _ => Err(ForecastError::Status {
                status,
                body: truncate_body(&body),
            }),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
