//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim: settings
//! resolution, candidate input, engine dispatch and report printing.

use anyhow::{anyhow, bail, Context, Result};
use primewitness::{evaluate, evaluate_parallel, Config, OutputFormat, TestReport, Witnesses};
use rug::Integer;
use std::io::{Read, Write};
use tracing::{info, warn};

use super::Cli;

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug)]
struct Settings {
    witnesses: Witnesses,
    parallel: bool,
    format: OutputFormat,
}

/// Flags win over the config file, the config file wins over defaults.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let witnesses = match &cli.witnesses {
        Some(w) => w.clone(),
        None => config.witnesses()?,
    };
    Ok(Settings {
        witnesses,
        parallel: cli.parallel || config.parallel,
        format: cli.format.unwrap_or(config.format),
    })
}

/// Parse a decimal candidate, tolerating surrounding whitespace.
pub fn parse_candidate(text: &str) -> Result<Integer> {
    let text = text.trim();
    Integer::parse(text)
        .map(Integer::from)
        .map_err(|_| anyhow!("invalid candidate '{}': expected a decimal integer", text))
}

/// Candidates from arguments, or whitespace-separated tokens on stdin.
fn read_candidates(cli: &Cli) -> Result<Vec<String>> {
    if !cli.candidates.is_empty() {
        return Ok(cli.candidates.clone());
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading candidates from stdin")?;
    let tokens: Vec<String> = input.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        bail!("no candidate given on the command line or stdin");
    }
    Ok(tokens)
}

fn render(report: &TestReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json().to_string(),
    }
}

/// Test every candidate and print its report. Stops at the first invalid one.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = resolve_settings(cli)?;
    info!(
        witnesses = %settings.witnesses,
        parallel = settings.parallel,
        format = %settings.format,
        "primewitness starting"
    );
    if settings.witnesses.is_empty() {
        warn!("no witnesses configured; every odd candidate passes vacuously");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for token in read_candidates(cli)? {
        let n = parse_candidate(&token)?;
        let report = if settings.parallel {
            evaluate_parallel(&n, &settings.witnesses)?
        } else {
            evaluate(&n, &settings.witnesses)?
        };
        info!(
            candidate = %n,
            rounds = report.records.len(),
            probable_prime = report.is_probable_prime(),
            "candidate tested"
        );
        writeln!(out, "{}", render(&report, settings.format))?;
    }
    out.flush()?;
    Ok(())
}

/// Size the global rayon pool used by `--parallel`.
pub fn configure_rayon(threads: Option<usize>) {
    let num_threads = threads.unwrap_or(0);
    if num_threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            warn!(error = %e, "Could not configure rayon thread pool");
        }
    }
}
