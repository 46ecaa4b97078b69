//! Maze text parsing and validation.
//!
//! Input format: a header line `ROWS COLS`, then exactly `ROWS` lines of
//! exactly `COLS` symbols each, from the table
//! `@` start, `$` goal, space, `X` breakable wall, `#` solid wall,
//! `S`/`N`/`E`/`W` redirects, `B` beer, `I` inverter, `T` teleporter.
//!
//! All input validation happens here; the core assumes a well-formed maze
//! and does not re-validate.

use anyhow::{Context, Result, bail};

use crate::core::grid::{Coordinate, Grid, Tile};

/// A parsed, validated maze ready for simulation.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub start: Coordinate,
}

/// Parse the header-plus-rows text format.
pub fn parse(input: &str) -> Result<Maze> {
    let mut lines = input.lines();
    let header = lines.next().context("empty input: missing header line")?;
    let (rows, cols) = parse_header(header)?;
    let body: Vec<&str> = lines.collect();
    if body.len() != rows {
        bail!("header declares {rows} rows but input has {}", body.len());
    }
    let maze = parse_rows(&body)?;
    if maze.grid.cols() != cols {
        bail!(
            "header declares {cols} columns but rows have {}",
            maze.grid.cols()
        );
    }
    Ok(maze)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let rows = parts.next().context("header missing row count")?;
    let cols = parts.next().context("header missing column count")?;
    if parts.next().is_some() {
        bail!("header has trailing tokens: {line:?}");
    }
    let rows: usize = rows
        .parse()
        .with_context(|| format!("bad row count {rows:?}"))?;
    let cols: usize = cols
        .parse()
        .with_context(|| format!("bad column count {cols:?}"))?;
    if rows == 0 || cols == 0 {
        bail!("maze dimensions must be positive");
    }
    Ok((rows, cols))
}

/// Parse maze rows without a header. Dimensions are taken from the rows
/// themselves; every row must match the first row's width.
pub fn parse_rows(rows: &[&str]) -> Result<Maze> {
    if rows.is_empty() {
        bail!("maze has no rows");
    }
    let cols = rows[0].chars().count();
    if cols == 0 {
        bail!("maze rows are empty");
    }

    let mut tiles = Vec::with_capacity(rows.len() * cols);
    let mut start = None;
    let mut teleporters = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        let symbols: Vec<char> = row.chars().collect();
        if symbols.len() != cols {
            bail!("row {y} has {} symbols, expected {cols}", symbols.len());
        }
        for (x, &c) in symbols.iter().enumerate() {
            let tile =
                Tile::from_symbol(c).with_context(|| format!("unknown symbol {c:?} at ({x}, {y})"))?;
            let pos = Coordinate::new(x as i32, y as i32);
            match tile {
                Tile::Start => {
                    if start.replace(pos).is_some() {
                        bail!("more than one start tile");
                    }
                }
                Tile::Teleporter => teleporters.push(pos),
                _ => {}
            }
            tiles.push(tile);
        }
    }

    let start = start.context("missing start tile")?;
    let pair = match teleporters[..] {
        [] => None,
        [a, b] => Some((a, b)),
        _ => bail!(
            "expected 0 or 2 teleporter tiles, found {}",
            teleporters.len()
        ),
    };
    Ok(Maze {
        grid: Grid::new(rows.len(), cols, tiles, pair),
        start,
    })
}
