mod args;
mod generator;
mod stream;

use args::CliArgs;
use chrono::Local;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use stream::{LogShape, write_log_rows};
use tokio::{
    fs::File,
    io::{self, AsyncWrite},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let date = match args.date() {
        Some(date) => *date,
        None => Local::now().date_naive(),
    };
    let shape = LogShape {
        rows: *args.rows(),
        batch_size: *args.batch_size(),
        date,
        malformed_ratio: *args.malformed_ratio(),
    };
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let mut out: Box<dyn AsyncWrite + Unpin> = match args.output() {
        Some(path) => Box::new(File::create(path).await?),
        None => Box::new(io::stdout()),
    };
    let written = write_log_rows(&mut out, &mut rng, &shape).await?;
    eprintln!("Wrote {written} log rows for {}", shape.date);
    Ok(())
}
