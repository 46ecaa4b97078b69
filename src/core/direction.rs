//! Compass directions and the movement priority rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::grid::Coordinate;

/// The four moves the robot can make. Serialized and displayed with the
/// protocol tokens `SOUTH`, `EAST`, `NORTH`, `WEST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    South,
    East,
    North,
    West,
}

impl Direction {
    /// Unit offset in grid coordinates (`y` grows southward).
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// The neighboring coordinate one cell away in this direction.
    pub fn apply(self, from: Coordinate) -> Coordinate {
        let (dx, dy) = self.offset();
        Coordinate::new(from.x + dx, from.y + dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::North => "NORTH",
            Direction::West => "WEST",
        };
        f.write_str(token)
    }
}

/// The five-candidate preference scan for one move: current facing first,
/// then the fixed tie-break order, reversed while inversion is active.
pub fn priority_order(facing: Direction, inverted: bool) -> [Direction; 5] {
    if inverted {
        [
            facing,
            Direction::West,
            Direction::North,
            Direction::East,
            Direction::South,
        ]
    } else {
        [
            facing,
            Direction::South,
            Direction::East,
            Direction::North,
            Direction::West,
        ]
    }
}
