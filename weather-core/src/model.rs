use serde::Deserialize;

/// City and country exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub country: String,
}

impl LocationQuery {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    /// The `q` parameter sent to the API, e.g. `"minneapolis,us"`.
    pub fn query_string(&self) -> String {
        format!("{},{}", self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryMain {
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryCondition {
    pub description: String,
}

/// One timestamped data point of the forecast list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastEntry {
    /// Unix seconds.
    pub dt: i64,
    pub main: EntryMain,
    pub weather: Vec<EntryCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(Vec<ForecastEntry>),
    NotFound,
}
