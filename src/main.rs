use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gambit_console::Session;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    info!("gambit starting");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run().context("console session failed")?;
    Ok(())
}
