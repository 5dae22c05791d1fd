// livetiming-cache: mirror a season of live timing archives to local files.
// Entry point, CLI parsing and logging setup.

mod archive;
mod cache;
mod config;
mod error;
mod mirror;
mod parser;
mod streams;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::archive::ArchiveClient;
use crate::config::MirrorConfig;
use crate::error::Result;
use crate::mirror::{Mirror, WalkOutcome};

#[derive(Debug, Parser)]
#[command(
    name = "livetiming-cache",
    version,
    about = "Mirror live timing telemetry archives into a local file cache",
    after_help = "Environment: LIVETIMING_BASE_URL, LIVETIMING_DATA_DIR, LIVETIMING_CONCURRENCY, RUST_LOG."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Cache the season index and every session stream for a year
    Catalog {
        /// Season year to catalog
        year: u32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Catalog { year } => {
            let config = MirrorConfig::from_env()?;
            let client = ArchiveClient::new(config.base_url.clone())?;
            let mirror = Mirror::new(client, &config);

            match mirror.walk_catalog(year).await? {
                WalkOutcome::NoMeetings => println!("No meetings found for {}", year),
                WalkOutcome::Completed(report) => debug!(
                    year = report.year,
                    sessions = report.sessions,
                    elapsed_ms = report.elapsed_ms(),
                    "catalog complete"
                ),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_catalog_requires_integer_year() {
        let cli = Cli::try_parse_from(["livetiming-cache", "catalog", "2023"]).unwrap();
        assert!(matches!(cli.command, Command::Catalog { year: 2023 }));

        assert!(Cli::try_parse_from(["livetiming-cache", "catalog", "twenty"]).is_err());
        assert!(Cli::try_parse_from(["livetiming-cache", "catalog"]).is_err());
    }
}
