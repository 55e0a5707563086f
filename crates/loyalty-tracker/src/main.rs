//! Loyalty tracker CLI
//!
//! - Reads a strict YAML config (path = first argument, default `tracker.yaml`)
//! - Replays its measurements into a named tracker
//! - Prints the history as a text timeline or JSON on stdout

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use loyalty_core::Result;
use loyalty_tracker::{config, report, Tracker};

const DEFAULT_CONFIG: &str = "tracker.yaml";

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, config = %path, "loyalty-tracker failed");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    let tracker = Tracker::from_config(&cfg)?;
    let history = tracker.history()?;

    if let Some(last) = history.last() {
        tracing::info!(
            tracker = %tracker.name(),
            records = history.len(),
            state = %last.loyalty_state,
            health_score = last.health_score,
            "latest assessment"
        );
    }

    match report::render(cfg.tracker.output, tracker.name(), &history)? {
        Some(out) => print!("{out}"),
        None => tracing::info!(tracker = %tracker.name(), "no data to plot"),
    }
    Ok(())
}
