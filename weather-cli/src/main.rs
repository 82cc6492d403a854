//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Loading configuration and opening the log file
//! - Prompting for the location
//! - Handing the query to `weather-core` and printing the result

use clap::Parser;

mod cli;
mod logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
