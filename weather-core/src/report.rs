use std::io::{self, Write};

use tracing::{error, info, warn};

use crate::{
    FetchOutcome, ForecastEntry, LocationQuery,
    error::ForecastError,
    present::{GENERIC_ERROR_MESSAGE, NOT_FOUND_MESSAGE, format_entry},
    provider::ForecastProvider,
};

/// How a single run ended.
#[derive(Debug)]
pub enum Report {
    /// Number of lines printed (possibly zero).
    Rendered(usize),
    NotFound,
    /// The user saw the generic message; the cause went to the log.
    Failed(ForecastError),
}

/// Fetch the forecast for `query` and write the user-facing result to `out`.
///
/// Only write failures on `out` itself are returned as errors.
pub async fn report_forecast<W: Write>(
    provider: &dyn ForecastProvider,
    query: &LocationQuery,
    out: &mut W,
) -> io::Result<Report> {
    let result = match provider.fetch_forecast(query).await {
        Ok(FetchOutcome::Found(entries)) => render_entries(query, &entries, out)?,
        Ok(FetchOutcome::NotFound) => {
            info!("Location {}, {} not found", query.city, query.country);
            writeln!(out, "{NOT_FOUND_MESSAGE}")?;
            return Ok(Report::NotFound);
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(count) => Ok(Report::Rendered(count)),
        Err(err) => {
            error!(
                error = ?err,
                "Error fetching current weather data for {}, {}: {err}", query.city, query.country
            );
            writeln!(out, "{GENERIC_ERROR_MESSAGE}")?;
            Ok(Report::Failed(err))
        }
    }
}

fn render_entries<W: Write>(
    query: &LocationQuery,
    entries: &[ForecastEntry],
    out: &mut W,
) -> io::Result<Result<usize, ForecastError>> {
    for (rendered, entry) in entries.iter().enumerate() {
        let line = match format_entry(query, entry) {
            Ok(line) => line,
            Err(err) => {
                warn!(rendered, "stopped rendering at malformed entry");
                return Ok(Err(err));
            }
        };
        writeln!(out, "{line}")?;
        info!("Successful query with result: {line}");
    }

    Ok(Ok(entries.len()))
}
