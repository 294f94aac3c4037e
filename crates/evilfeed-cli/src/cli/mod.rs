//! CLI for the evilfeed blocklist generator.
//!
//! A single invocation with no required flags performs one full run:
//! fetch the feed, deduplicate, regenerate the blocklist files.

use anyhow::Result;
use clap::Parser;
use evilfeed_core::{config, pipeline};
use std::path::PathBuf;

/// Fetch the malicious-URL feed and regenerate the blocklist files.
#[derive(Debug, Parser)]
#[command(name = "evilfeed")]
#[command(about = "evilfeed: malicious-URL feed to blocklist converter", long_about = None)]
pub struct Cli {
    /// Override the feed endpoint URL from the config.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Directory the blocklist files are written to (default: config, then current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override the total request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    if let Some(timeout_secs) = cli.timeout_secs {
        cfg.timeout_secs = timeout_secs;
    }
    let endpoint = cli.endpoint.unwrap_or_else(|| cfg.endpoint.clone());
    let output_dir = match cli.output_dir.or_else(|| cfg.output_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    pipeline::run(&cfg, &endpoint, &output_dir)
}
