//! The [`Maze`] type: a grid together with its start and end cells.

use std::fmt;

use crate::error::{CoordIssue, MazeError};
use crate::geom::Coord;
use crate::grid::Grid;
use crate::render;
use crate::tile::Tile;

/// A grid plus start and end coordinates.
///
/// Start and end are always inside the grid and always open. Every
/// constructor and editing method upholds this, so a `Maze` can be handed to
/// a solver without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MazeRepr"))]
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl Maze {
    /// Create a maze, rejecting a start or end that is out of bounds or on a
    /// wall.
    pub fn new(grid: Grid, start: Coord, end: Coord) -> Result<Self, MazeError> {
        check_endpoint(&grid, start)?;
        check_endpoint(&grid, end)?;
        Ok(Self { grid, start, end })
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start coordinate.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// End coordinate.
    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Move the start cell. It must be in bounds and open.
    pub fn set_start(&mut self, p: Coord) -> Result<(), MazeError> {
        check_endpoint(&self.grid, p)?;
        self.start = p;
        Ok(())
    }

    /// Move the end cell. It must be in bounds and open.
    pub fn set_end(&mut self, p: Coord) -> Result<(), MazeError> {
        check_endpoint(&self.grid, p)?;
        self.end = p;
        Ok(())
    }

    /// Flip the cell at `p` between wall and open and return its new state.
    ///
    /// The start and end cells cannot be toggled.
    pub fn toggle_wall(&mut self, p: Coord) -> Result<Tile, MazeError> {
        let tile = self.grid.at(p).ok_or(MazeError::InvalidCoordinate {
            pos: p,
            reason: CoordIssue::OutOfBounds,
        })?;
        if p == self.start || p == self.end {
            return Err(MazeError::InvalidCoordinate {
                pos: p,
                reason: CoordIssue::Endpoint,
            });
        }
        let tile = tile.toggled();
        self.grid.set(p, tile)?;
        Ok(tile)
    }
}

fn check_endpoint(grid: &Grid, p: Coord) -> Result<(), MazeError> {
    match grid.at(p) {
        None => Err(MazeError::InvalidCoordinate {
            pos: p,
            reason: CoordIssue::OutOfBounds,
        }),
        Some(Tile::Wall) => Err(MazeError::InvalidCoordinate {
            pos: p,
            reason: CoordIssue::Wall,
        }),
        Some(Tile::Open) => Ok(()),
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_text(self, None))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MazeRepr {
    grid: Grid,
    start: Coord,
    end: Coord,
}

#[cfg(feature = "serde")]
impl TryFrom<MazeRepr> for Maze {
    type Error = MazeError;

    fn try_from(r: MazeRepr) -> Result<Self, MazeError> {
        Maze::new(r.grid, r.start, r.end)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let grid = Grid::new(2, 2).unwrap();
        let m = Maze::new(grid, Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn maze_rejects_wall_start() {
        let json = r#"{"grid":{"rows":1,"cols":2,"tiles":["Wall","Open"]},
            "start":{"row":0,"col":0},"end":{"row":0,"col":1}}"#;
        assert!(serde_json::from_str::<Maze>(json).is_err());
    }
}
