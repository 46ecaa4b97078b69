//! Orchestration for the `solve` CLI command.

use anyhow::Result;
use tracing::info;

use crate::core::driver::{self, DriverConfig, Outcome};
use crate::io::parser::parse;

/// Parse a maze from text and run the simulation to completion.
///
/// `Ok` covers both terminal outcomes ([`Outcome::Finished`] and
/// [`Outcome::LoopDetected`]); errors are malformed input or internal
/// simulation failures.
pub fn solve_text(input: &str, config: &DriverConfig) -> Result<Outcome> {
    let mut maze = parse(input)?;
    info!(
        rows = maze.grid.rows(),
        cols = maze.grid.cols(),
        "maze parsed"
    );
    let outcome = driver::run(&mut maze.grid, maze.start, config)?;
    Ok(outcome)
}
