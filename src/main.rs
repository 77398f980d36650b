//! Bean counter runner (default binary).
//!
//! Drops the requested beans through the machine and prints the slot bean counts.
//! Malformed arguments print usage and exit without running.

use std::io::{self, Write};

use anyhow::{Context, Result};

use bean_counter::cli::{Cli, USAGE};
use bean_counter::config::RunConfig;
use bean_counter::{runner, telemetry};

fn main() -> Result<()> {
    telemetry::init();

    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            tracing::debug!(%err, "rejected arguments");
            let mut stdout = io::stdout();
            stdout.write_all(USAGE.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }
    };

    let config = RunConfig::from_env(&cli).context("invalid environment configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner::run(&config, &mut out)?;
    Ok(())
}
