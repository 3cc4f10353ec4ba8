//! mongo-probe
//!
//! One-shot connectivity probe for a MongoDB endpoint. Connects, pings,
//! lists databases, round-trips a throwaway document through a scratch
//! namespace, cleans up, and closes the connection. Prints one marker line
//! per step and exits 0 on full success, 1 if any step failed.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use probe::ProbeOptions;
use std::process::ExitCode;
use tracing::info;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "mongo-probe")]
#[command(about = "One-shot connectivity probe for a MongoDB endpoint")]
struct Cli {
    /// MongoDB connection URL (overrides MONGODB_URL / MONGO_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Scratch database created and dropped by the probe
    #[arg(short, long, default_value = "probe_scratch")]
    database: String,

    /// Scratch collection inside the scratch database
    #[arg(short, long, default_value = "probe")]
    collection: String,
}

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let cli = Cli::parse();

    // Load configuration from CLI flags and environment variables
    let config = Config::from_env(cli.url.as_deref())?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Probing MongoDB at {}", config.mongodb.url());

    let options = ProbeOptions::new(cli.database, cli.collection);
    let report = probe::run(&config.mongodb, &options).await;

    // One marker line per step, in step order; the close marker is last
    for line in report.lines() {
        println!("{line}");
    }

    if report.succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
