//! # Main — CLI Entry Point
//!
//! Reads one or more candidates (arguments, or whitespace-separated integers
//! on stdin), runs the Miller–Rabin engine on each and prints one report per
//! candidate. Invalid candidates are a hard error with a non-zero exit status.
//!
//! ## Options
//!
//! - `--witnesses` / `PRIMEWITNESS_WITNESSES`: witness bases, `2,3,4,5` or `2..=5`.
//! - `--config` / `PRIMEWITNESS_CONFIG`: TOML file with `witnesses`, `parallel`, `format`.
//! - `--parallel`: run witness rounds on the rayon pool.
//! - `--format`: `text` (default) or `json`.
//! - `--threads`: rayon thread pool size (defaults to all logical cores).
//!
//! Logs go to stderr; `LOG_FORMAT=json` switches to JSON lines and `RUST_LOG`
//! sets the filter (default `warn`).

mod cli;

use anyhow::Result;
use clap::Parser;
use primewitness::{OutputFormat, Witnesses};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "primewitness",
    about = "Miller-Rabin probable-prime test over a fixed witness sequence",
    allow_negative_numbers = true
)]
struct Cli {
    /// Candidates to test (read from stdin when omitted)
    candidates: Vec<String>,

    /// Witness bases, comma-separated or an inclusive range (e.g. 2,3,4,5 or 2..=5)
    #[arg(long, env = "PRIMEWITNESS_WITNESSES")]
    witnesses: Option<Witnesses>,

    /// Path to a TOML config file
    #[arg(long, env = "PRIMEWITNESS_CONFIG")]
    config: Option<PathBuf>,

    /// Evaluate witness rounds in parallel (same report as sequential)
    #[arg(long)]
    parallel: bool,

    /// Output format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // LOG_FORMAT=json for log shippers, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    cli::configure_rayon(cli.threads);
    cli::run(&cli)
}
