use anyhow::{Context, Result, bail};
use clap::Parser;
use inquire::InquireError;
use std::io::{self, BufRead, Write};
use tracing::debug;
use weather_core::{Config, LocationQuery, provider_from_config, report_forecast};

use crate::logger;

pub const CITY_PROMPT: &str = "What city?";
pub const COUNTRY_PROMPT: &str = "What country is that in?";

/// Top-level CLI struct. The tool takes no arguments; everything is prompted for.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Print the 5-day forecast for a city",
    long_about = "Print the 5-day forecast for a city.\n\n\
                  Reads the OpenWeatherMap API key from WEATHER_KEY. \
                  Optional: WEATHER_API_URL, WEATHER_LOG, RUST_LOG."
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> Result<()> {
        execute(|name| std::env::var(name).ok(), ask_user, &mut io::stdout()).await
    }
}

/// Load config, open the log, collect the location, then fetch and print.
///
/// Configuration problems are reported before anything is prompted or requested.
pub async fn execute<L, A, W>(lookup: L, ask: A, out: &mut W) -> Result<()>
where
    L: Fn(&str) -> Option<String>,
    A: FnMut(&str) -> Result<String>,
    W: Write,
{
    let config = Config::from_lookup(lookup).context("Missing configuration")?;
    let _log = logger::init(&config.log_file)?;
    debug!(?config, "configuration loaded");

    let query = collect_location(ask)?;

    let provider = provider_from_config(&config);
    let report = report_forecast(provider.as_ref(), &query, out)
        .await
        .context("Failed to write forecast to stdout")?;
    debug!(?report, "run finished");

    Ok(())
}

/// Ask for city then country, keeping the answers exactly as typed.
pub fn collect_location<F>(mut ask: F) -> Result<LocationQuery>
where
    F: FnMut(&str) -> Result<String>,
{
    let city = ask(CITY_PROMPT)?;
    let country = ask(COUNTRY_PROMPT)?;
    Ok(LocationQuery { city, country })
}

/// Interactive prompt, or a plain line from stdin when it is not a terminal.
fn ask_user(prompt: &str) -> Result<String> {
    match inquire::Text::new(prompt).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::NotTTY) => {
            let mut stdout = io::stdout();
            write!(stdout, "{prompt} ")?;
            stdout.flush()?;
            read_answer(&mut io::stdin().lock())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to read answer to {prompt:?}")),
    }
}

/// Read one line, dropping only the line terminator.
fn read_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Unexpected end of input");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
