//! Run configuration: CLI arguments merged with environment overrides.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `BEAN_COUNTER_SEED` | `u64` seed for a reproducible run (entropy when unset) |
//! | `BEAN_COUNTER_SUMMARY` | `json` appends a JSON snapshot line to the report |
//! | `BEAN_COUNTER_LOG` | tracing filter directive (see [`crate::telemetry`]) |

use std::env;

use thiserror::Error;

use crate::cli::Cli;
use crate::types::Mode;

pub const SEED_ENV: &str = "BEAN_COUNTER_SEED";
pub const SUMMARY_ENV: &str = "BEAN_COUNTER_SUMMARY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Summary {
    /// Only the two report lines.
    #[default]
    Text,
    /// Report lines followed by the machine snapshot as JSON.
    Json,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BEAN_COUNTER_SEED={value:?} is not an unsigned 64-bit integer")]
    InvalidSeed { value: String },
    #[error("BEAN_COUNTER_SUMMARY={value:?} is not a known summary format (expected `text` or `json`)")]
    UnknownSummary { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub slot_count: usize,
    pub bean_count: usize,
    pub mode: Mode,
    pub debug: bool,
    pub seed: Option<u64>,
    pub summary: Summary,
}

impl RunConfig {
    /// Create from parsed arguments and the process environment
    pub fn from_env(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_lookup(cli, |key| env::var(key).ok())
    }

    /// Create from parsed arguments and an arbitrary variable lookup.
    pub fn from_lookup<F>(cli: &Cli, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match non_empty(lookup(SEED_ENV)) {
            Some(value) => Some(
                value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { value })?,
            ),
            None => None,
        };

        let summary = match non_empty(lookup(SUMMARY_ENV)) {
            None => Summary::Text,
            Some(value) => match value.to_lowercase().as_str() {
                "text" => Summary::Text,
                "json" => Summary::Json,
                _ => return Err(ConfigError::UnknownSummary { value }),
            },
        };

        Ok(Self {
            slot_count: cli.slot_count as usize,
            bean_count: cli.bean_count as usize,
            mode: cli.mode,
            debug: cli.debug(),
            seed,
            summary,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
