//! Robot state: the direction-priority scan and single-step tile effects.

use crate::core::direction::{Direction, priority_order};
use crate::core::grid::{Coordinate, Grid, Tile, WallBreak};

/// Robot configuration at one instant of the simulation.
///
/// Each step produces a brand-new value; states are never mutated after
/// construction. `just_teleported` is transient bookkeeping for the driver's
/// checkpoint rule and is excluded from loop-detection identity; see
/// [`StateKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotState {
    pub pos: Coordinate,
    pub facing: Direction,
    pub breaker: bool,
    pub inverted: bool,
    pub just_teleported: bool,
}

/// Loop-detection identity of a [`BotState`].
///
/// Two states are the same for loop purposes iff these four fields match,
/// regardless of how the robot got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub pos: Coordinate,
    pub facing: Direction,
    pub breaker: bool,
    pub inverted: bool,
}

impl BotState {
    /// Initial state on the start tile: facing south, no flags set.
    pub fn initial(pos: Coordinate) -> Self {
        Self {
            pos,
            facing: Direction::South,
            breaker: false,
            inverted: false,
            just_teleported: false,
        }
    }

    pub fn key(&self) -> StateKey {
        StateKey {
            pos: self.pos,
            facing: self.facing,
            breaker: self.breaker,
            inverted: self.inverted,
        }
    }

    /// First enterable direction in priority order, or `None` when the robot
    /// is boxed in on all four sides.
    pub fn next_direction(&self, grid: &Grid) -> Option<Direction> {
        priority_order(self.facing, self.inverted)
            .into_iter()
            .find(|dir| self.can_enter(grid, dir.apply(self.pos)))
    }

    /// Enterable policy: breakable walls admit the robot only while the
    /// breaker flag is set; solid walls and off-grid cells never do.
    fn can_enter(&self, grid: &Grid, dest: Coordinate) -> bool {
        match grid.get(dest) {
            Some(Tile::BreakableWall) => self.breaker,
            Some(Tile::SolidWall) | None => false,
            Some(_) => true,
        }
    }

    /// Move one cell in `dir` and apply the destination tile's effect.
    ///
    /// Exactly one effect fires per step, chosen by the tile kind at entry.
    /// A breakable wall is only ever entered with the breaker set (per
    /// [`BotState::next_direction`]); breaking it mutates the grid, and the
    /// returned [`WallBreak`] must be forwarded to the loop detector.
    pub fn step(&self, grid: &mut Grid, dir: Direction) -> (BotState, Option<WallBreak>) {
        let mut next = BotState {
            pos: dir.apply(self.pos),
            facing: dir,
            breaker: self.breaker,
            inverted: self.inverted,
            just_teleported: false,
        };
        let mut broke = None;
        match grid.tile_at(next.pos) {
            Tile::Redirect(forced) => next.facing = forced,
            Tile::Beer => next.breaker = !self.breaker,
            Tile::Inverter => next.inverted = !self.inverted,
            Tile::BreakableWall => broke = Some(grid.break_wall(next.pos)),
            Tile::Teleporter => {
                next.pos = grid.teleport_partner(next.pos);
                next.just_teleported = true;
            }
            Tile::Start | Tile::Goal | Tile::Empty | Tile::SolidWall => {}
        }
        (next, broke)
    }

    /// True when the robot is standing on the goal tile.
    pub fn found_goal(&self, grid: &Grid) -> bool {
        grid.tile_at(self.pos) == Tile::Goal
    }
}
