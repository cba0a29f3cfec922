mod collector;
mod error;
mod fetch;
mod model;
mod parser;
mod settings;

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use error::CollectError;
use fetch::{Fetch, HttpFetcher};
use parser::{Curl, Linux, Source, Windows};
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "errcode_scraper",
    about = "Scrape curl, Linux errno and Windows system error codes into JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Windows, Linux and curl, in that order (default)
    All,
    /// Windows system error codes -> windows_system_errors.json
    Windows,
    /// Linux errno table -> errno.json
    Linux,
    /// libcurl error codes -> curl_errors.json
    Curl,
}

const ALL_SOURCES: &[&dyn Source] = &[&Windows, &Linux, &Curl];

impl Commands {
    fn sources(self) -> &'static [&'static dyn Source] {
        match self {
            Commands::All => ALL_SOURCES,
            Commands::Windows => &[&Windows],
            Commands::Linux => &[&Linux],
            Commands::Curl => &[&Curl],
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(settings = ?settings, "Starting error code collection");

    let fetcher = HttpFetcher::new(settings.timeout())?;
    let command = cli.command.unwrap_or(Commands::All);
    let result = run(command.sources(), &fetcher, &settings.output_dir);

    let code = exit_status(result)?;
    if code == 0 {
        info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    }
    Ok(ExitCode::from(code))
}

/// Collect each source in order, stopping at the first failure.
fn run(sources: &[&dyn Source], fetcher: &dyn Fetch, output_dir: &Path) -> Result<(), CollectError> {
    for source in sources {
        collector::collect(*source, fetcher, output_dir)?;
    }
    Ok(())
}

/// Network failures are logged and become exit status 1; parse and I/O
/// failures propagate as errors.
fn exit_status(result: Result<(), CollectError>) -> anyhow::Result<u8> {
    match result {
        Ok(()) => Ok(0),
        Err(e) if e.is_network() => {
            error!("{}", e);
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}
