//! intstream-lab - array statistics and transformation demo.
//!
//! Runs every toolkit operation over one integer sequence and prints
//! labeled results. Logs go to stderr (`RUST_LOG=debug` for per-section
//! tracing).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use intstream_lab::config::LabConfig;
use intstream_lab::report;
use intstream_lab::sequence::{InputSequence, DEMO_VALUES};

/// intstream-lab: array statistics and transformation toolkit demo
#[derive(Parser, Debug)]
#[command(name = "intstream-lab")]
#[command(version)]
#[command(about = "Aggregate, transform, match and reduce an integer sequence", long_about = None)]
struct Cli {
    /// Input values, comma or space separated (default: demo fixture)
    #[arg(short, long, allow_hyphen_values = true)]
    values: Option<String>,

    /// YAML config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Elements to skip in the limit/skip step
    #[arg(long)]
    skip: Option<usize>,

    /// Elements to keep in the limit/skip step
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LabConfig::default(),
    }
    .with_window(cli.skip, cli.limit);

    let values = match &cli.values {
        Some(text) => InputSequence::parse(text).context("parsing --values")?.into_vec(),
        None => DEMO_VALUES.to_vec(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(Some(values), &config, &mut out)?;
    out.flush()?;

    Ok(())
}
