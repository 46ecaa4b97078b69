//! Test-only helpers for constructing mazes and robot states.

use crate::core::grid::{Coordinate, Grid};
use crate::core::state::BotState;
use crate::io::parser::parse_rows;

/// Build a grid from literal rows using the input symbol table, returning
/// the grid and the start coordinate.
///
/// Panics on malformed input; tests supply known-good mazes.
pub fn maze(rows: &[&str]) -> (Grid, Coordinate) {
    let maze = parse_rows(rows).expect("valid test maze");
    (maze.grid, maze.start)
}

/// Build a grid and the initial robot state on its start tile.
pub fn start_state(rows: &[&str]) -> (Grid, BotState) {
    let (grid, start) = maze(rows);
    (grid, BotState::initial(start))
}
