//! Experiment driver: build beans, run the machine to completion, write the report.
//!
//! The report is written to any `io::Write` so it can be captured in tests:
//!
//! ```text
//! Slot bean counts:
//!    0   3  12  ...
//! ```
//!
//! In debug mode the board is printed once after loading and again after every
//! tick that changed the machine.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{RunConfig, Summary};
use crate::core::{Bean, BeanRng, Machine, MachineSnapshot};
use crate::term::BoardView;

pub const REPORT_HEADER: &str = "Slot bean counts:";

pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<MachineSnapshot> {
    let mut machine = Machine::try_new(config.slot_count)?;

    let mut rng = match config.seed {
        Some(seed) => BeanRng::new(seed),
        None => BeanRng::from_entropy(),
    };
    let beans = Bean::batch(config.bean_count, config.slot_count, config.mode, &mut rng);
    machine.reset(beans);

    let view = BoardView::default();
    if config.debug {
        writeln!(out, "{}", view.board_string(&machine))?;
    }

    let mut ticks = 0usize;
    while machine.advance_step() {
        ticks += 1;
        if config.debug {
            writeln!(out, "{}", view.board_string(&machine))?;
        }
    }

    let snapshot = machine.snapshot();
    info!(
        ticks,
        mode = %config.mode,
        average = snapshot.average,
        "run finished"
    );

    writeln!(out, "{}", REPORT_HEADER)?;
    writeln!(out, "{}", view.slot_string(&machine))?;
    if config.summary == Summary::Json {
        let json = serde_json::to_string(&snapshot).context("serializing run summary")?;
        writeln!(out, "{}", json)?;
    }
    out.flush()?;

    Ok(snapshot)
}
