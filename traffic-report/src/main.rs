mod analytics;
mod error;
mod ingest;
mod invariants;
mod logging;
mod models;
mod parser;

use analytics::{BrowserTally, HourlyHistogram, ImageShare, SIGNATURES};
use clap::Parser;
use error::FetchError;
use ingest::download;
use models::LogRecord;
use std::process::ExitCode;
use tracing::{Level, debug, enabled};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the comma separated access log to analyze
    #[arg(long)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init_logging();
    let args = Args::parse();

    match run(&args.url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(url: &str) -> Result<(), FetchError> {
    println!("Downloading file from {url}...");
    let text = download(url).await?;

    println!("Processing file...");
    let records = parser::parse(&text);

    println!("Analyzing data...");
    report(&records);
    Ok(())
}

fn report(records: &[LogRecord]) {
    if enabled!(Level::DEBUG) {
        let bytes = bytes_served(records);
        debug!(requests = records.len(), %bytes, "traffic totals");
    }

    let images = ImageShare::from_records(records);
    debug!(images = images.images, total = images.total, "image share computed");
    println!("{images}");

    let browsers = BrowserTally::from_records(records);
    for (browser, _) in SIGNATURES {
        debug!(%browser, requests = browsers.count(browser), "browser tally");
    }
    if browsers.most_popular().is_some() {
        println!("{browsers}");
    }

    let hours = HourlyHistogram::from_records(records);
    if !hours.is_empty() {
        println!("{hours}");
    }
}

fn bytes_served(records: &[LogRecord]) -> i128 {
    records.iter().map(|r| i128::from(r.size)).sum()
}
