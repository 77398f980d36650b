//! Tracing bootstrap for the binary.
//!
//! Events go to stderr so stdout carries only the report. The filter is read from
//! `BEAN_COUNTER_LOG` (e.g. `debug`, `bean_counter_core=trace`) and defaults to `warn`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BEAN_COUNTER_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
