//! Command-line surface: `bean-counter SLOT_COUNT BEAN_COUNT <luck|skill> [debug]`.
//!
//! Any malformed invocation is reported as a [`UsageError`]; the binary answers it
//! by printing [`USAGE`] and exiting without running the machine.

use std::ffi::OsString;

use clap::Parser;
use thiserror::Error;

use crate::types::Mode;

/// Usage text printed for any malformed invocation.
pub const USAGE: &str = "\
Usage: bean-counter slot_count bean_count <luck | skill> [debug]
Example: bean-counter 10 400 luck
Example: bean-counter 20 1000 skill debug
";

/// Literal that switches on the per-tick board trace.
const DEBUG_FLAG: &str = "debug";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "bean-counter",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Number of slots (and peg rows); at least 1
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub slot_count: u32,

    /// Number of beans to drop
    pub bean_count: u32,

    /// Trajectory policy: luck or skill
    #[arg(value_parser = parse_mode)]
    pub mode: Mode,

    /// `debug` prints the board after every tick; anything else is ignored
    #[arg(allow_hyphen_values = true)]
    pub debug: Option<String>,
}

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("invalid arguments: {0}")]
    Invalid(#[from] clap::Error),
}

impl Cli {
    /// Parse a full argv (program name first).
    pub fn parse_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?)
    }

    pub fn debug(&self) -> bool {
        self.debug.as_deref() == Some(DEBUG_FLAG)
    }
}

/// Exact, lowercase mode literal.
fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::all()
        .into_iter()
        .find(|mode| mode.as_str() == s)
        .ok_or_else(|| format!("mode must be `luck` or `skill`, got `{}`", s))
}
