//! Maze grid: tile layout, the single permitted mutation, and the paired
//! teleporter lookup.

use std::fmt;

use crate::core::direction::Direction;

/// Grid coordinate (column `x`, row `y`). Signed so that off-grid neighbor
/// probes cannot underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Everything a maze cell can hold. The set is closed; the parser rejects
/// any other symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Start,
    Goal,
    Empty,
    /// `X`: passable only while the breaker flag is set; breaks to `Empty`
    /// when entered.
    BreakableWall,
    /// `#`: never passable.
    SolidWall,
    /// `S`/`N`/`E`/`W`: forces the robot's facing on entry.
    Redirect(Direction),
    /// `B`: toggles the breaker flag on entry.
    Beer,
    /// `I`: toggles priority inversion on entry.
    Inverter,
    /// `T`: relocates the robot to the paired teleporter on entry.
    Teleporter,
}

impl Tile {
    /// Map an input symbol to a tile, or `None` for an unknown symbol.
    pub fn from_symbol(c: char) -> Option<Tile> {
        match c {
            '@' => Some(Tile::Start),
            '$' => Some(Tile::Goal),
            ' ' => Some(Tile::Empty),
            'X' => Some(Tile::BreakableWall),
            '#' => Some(Tile::SolidWall),
            'S' => Some(Tile::Redirect(Direction::South)),
            'N' => Some(Tile::Redirect(Direction::North)),
            'E' => Some(Tile::Redirect(Direction::East)),
            'W' => Some(Tile::Redirect(Direction::West)),
            'B' => Some(Tile::Beer),
            'I' => Some(Tile::Inverter),
            'T' => Some(Tile::Teleporter),
            _ => None,
        }
    }
}

/// Event value returned by [`Grid::break_wall`]. The driver forwards it to
/// the loop detector, whose recorded history the mutation invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallBreak {
    pub pos: Coordinate,
}

/// Dense row-major tile grid with fixed dimensions.
///
/// The only mutation is [`Grid::break_wall`]; everything else about the
/// layout is fixed at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
    teleporters: Option<(Coordinate, Coordinate)>,
}

impl Grid {
    /// Build a grid from row-major tiles. `tiles` must hold exactly
    /// `rows * cols` entries.
    pub fn new(
        rows: usize,
        cols: usize,
        tiles: Vec<Tile>,
        teleporters: Option<(Coordinate, Coordinate)>,
    ) -> Self {
        debug_assert_eq!(tiles.len(), rows * cols);
        Self {
            rows,
            cols,
            tiles,
            teleporters,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile at `pos`. Panics when `pos` is outside the grid; positions
    /// reached during simulation are always in bounds.
    pub fn tile_at(&self, pos: Coordinate) -> Tile {
        match self.get(pos) {
            Some(tile) => tile,
            None => panic!("tile_at out of bounds: {pos}"),
        }
    }

    /// Bounds-checked tile probe. `None` for off-grid coordinates, which
    /// the movement rule treats as never enterable.
    pub fn get(&self, pos: Coordinate) -> Option<Tile> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(self.tiles[y * self.cols + x])
    }

    /// Turn the breakable wall at `pos` into an empty tile.
    ///
    /// Callers must hold `tile_at(pos) == Tile::BreakableWall`. The returned
    /// event must reach the loop detector; see [`WallBreak`].
    pub fn break_wall(&mut self, pos: Coordinate) -> WallBreak {
        debug_assert_eq!(self.tile_at(pos), Tile::BreakableWall);
        self.tiles[pos.y as usize * self.cols + pos.x as usize] = Tile::Empty;
        WallBreak { pos }
    }

    /// The other member of the teleporter pair.
    ///
    /// Only meaningful while standing on a teleporter tile; the parser
    /// guarantees the pair exists whenever any teleporter does.
    pub fn teleport_partner(&self, pos: Coordinate) -> Coordinate {
        let (a, b) = self
            .teleporters
            .expect("teleport_partner called without a configured pair");
        if pos == a { b } else { a }
    }
}
