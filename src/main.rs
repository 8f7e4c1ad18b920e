use std::io;

use anyhow::Result;
use clap::Parser;
use salary_calculator::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    // user-facing errors are already reported by `run` and end normally
    cli::run(&cli, stdin.lock(), stdout.lock())?;

    Ok(())
}

// Log to stderr so the report on stdout stays clean. RUST_LOG overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
