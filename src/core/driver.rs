//! The simulation loop: checkpoints, loop detection, termination.

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::detector::LoopDetector;
use crate::core::direction::Direction;
use crate::core::grid::{Coordinate, Grid};
use crate::core::state::BotState;

/// Terminal result of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Goal reached: the full move sequence, final entering move included.
    Finished(Vec<Direction>),
    /// A checkpoint configuration repeated; the robot can never reach the
    /// goal. A first-class outcome, not an error.
    LoopDetected,
}

/// Internal simulation failures. Both indicate bad upstream data or a
/// simulator bug, never a legitimate puzzle outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// No direction is enterable, the reverse of the current facing
    /// included. Valid puzzles always leave at least one exit.
    #[error("robot boxed in at {at}: no enterable direction")]
    BoxedIn { at: Coordinate },
    /// The defensive step bound tripped before the loop detector did,
    /// which points at a step-logic or detector bug.
    #[error("step cap of {cap} exceeded without reaching the goal or detecting a loop")]
    StepCapExceeded { cap: usize },
}

/// Tuning for a simulation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverConfig {
    /// Hard bound on total steps. `None` derives a generous bound from the
    /// grid's state-space size.
    pub max_steps: Option<usize>,
}

/// Generous multiple of the checkpoint state space (cells x 4 facings x
/// 2 breaker x 2 inversion), leaving headroom for straight-line travel
/// between checkpoints.
fn default_step_cap(grid: &Grid) -> usize {
    grid.rows() * grid.cols() * 4 * 2 * 2 * 16
}

/// Checkpoint rule: loop detection runs before the first move, before any
/// turn, and on every teleporter landing. Straight-line travel between
/// checkpoints cannot revisit a configuration, so it is skipped.
///
/// Teleporter landings are checked even when the facing is unchanged;
/// same-position loops threaded through a teleporter would otherwise never
/// pass a turn.
fn is_checkpoint(previous: Option<Direction>, next: Direction, just_teleported: bool) -> bool {
    previous != Some(next) || just_teleported
}

/// Run the simulation from `start` until the goal is reached, a loop is
/// confirmed, or the step cap trips.
pub fn run(grid: &mut Grid, start: Coordinate, config: &DriverConfig) -> Result<Outcome, SimError> {
    let cap = config.max_steps.unwrap_or_else(|| default_step_cap(grid));
    let mut detector = LoopDetector::new(grid.rows(), grid.cols());
    let mut state = BotState::initial(start);
    let mut moves: Vec<Direction> = Vec::new();
    let mut previous: Option<Direction> = None;

    while !state.found_goal(grid) {
        if moves.len() >= cap {
            return Err(SimError::StepCapExceeded { cap });
        }
        let dir = state
            .next_direction(grid)
            .ok_or(SimError::BoxedIn { at: state.pos })?;

        if is_checkpoint(previous, dir, state.just_teleported) {
            if detector.observed(&state) {
                debug!(steps = moves.len(), "loop detected");
                return Ok(Outcome::LoopDetected);
            }
            detector.record(&state);
        }

        let (next, broke) = state.step(grid, dir);
        if let Some(event) = broke {
            trace!(x = event.pos.x, y = event.pos.y, "wall broken, history cleared");
            detector.on_break(&event);
        }
        moves.push(dir);
        previous = Some(dir);
        state = next;
    }

    debug!(steps = moves.len(), "goal reached");
    Ok(Outcome::Finished(moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::maze;

    fn solve(rows: &[&str]) -> Result<Outcome, SimError> {
        let (mut grid, start) = maze(rows);
        run(&mut grid, start, &DriverConfig::default())
    }

    #[test]
    fn first_move_is_always_a_checkpoint() {
        assert!(is_checkpoint(None, Direction::South, false));
    }

    #[test]
    fn straight_travel_is_not_a_checkpoint() {
        assert!(!is_checkpoint(Some(Direction::East), Direction::East, false));
    }

    #[test]
    fn turns_and_teleport_landings_are_checkpoints() {
        assert!(is_checkpoint(Some(Direction::East), Direction::South, false));
        assert!(is_checkpoint(Some(Direction::East), Direction::East, true));
    }

    #[test]
    fn straight_corridor_reaches_goal() {
        assert_eq!(
            solve(&["#####", "#@ $#", "#####"]),
            Ok(Outcome::Finished(vec![Direction::East, Direction::East]))
        );
    }

    #[test]
    fn priority_prefers_south_over_east() {
        assert_eq!(
            solve(&["#####", "#@ ##", "## ##", "##$##", "#####"]),
            Ok(Outcome::Finished(vec![
                Direction::East,
                Direction::South,
                Direction::South,
            ]))
        );
    }

    #[test]
    fn dead_end_corridor_loops_forever() {
        // The robot ping-pongs between the corridor ends; the second visit to
        // an end with the same facing is the repeated checkpoint.
        assert_eq!(solve(&["#####", "#@  #", "#####"]), Ok(Outcome::LoopDetected));
    }

    #[test]
    fn boxed_in_is_an_error() {
        assert_eq!(
            solve(&["###", "#@#", "###"]),
            Err(SimError::BoxedIn {
                at: Coordinate::new(1, 1)
            })
        );
    }

    #[test]
    fn step_cap_is_distinct_from_loop_detection() {
        let (mut grid, start) = maze(&["#####", "#@ $#", "#####"]);
        let config = DriverConfig { max_steps: Some(1) };
        assert_eq!(
            run(&mut grid, start, &config),
            Err(SimError::StepCapExceeded { cap: 1 })
        );
    }

    #[test]
    fn beer_then_broken_wall_opens_the_way() {
        // Breaker picked up at B lets the robot walk through X, which breaks
        // to empty on entry.
        assert_eq!(
            solve(&["#######", "#@B X$#", "#######"]),
            Ok(Outcome::Finished(vec![Direction::East; 4]))
        );
    }

    #[test]
    fn wall_without_breaker_means_loop() {
        assert_eq!(
            solve(&["######", "#@ X$#", "######"]),
            Ok(Outcome::LoopDetected)
        );
    }

    #[test]
    fn teleport_landing_checkpoint_catches_teleport_loops() {
        // Facing never changes after the first move; only the teleport
        // landing checkpoint can expose the cycle.
        assert_eq!(solve(&["#####", "#T@T#", "#####"]), Ok(Outcome::LoopDetected));
    }

    #[test]
    fn runs_are_deterministic() {
        let rows = ["#######", "#@B X$#", "#######"];
        assert_eq!(solve(&rows), solve(&rows));
    }
}
